use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemChanges, ItemFilter, NewItem, Page, Pagination, PaginationMeta};

/// Repository trait for Item persistence
///
/// Every lookup selects items through [`ItemFilter::matches`]; when several
/// items match, single-item operations act on the first in insertion order.
/// Item names are unique: the check and the write happen atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item under a freshly generated id.
    /// Fails with `DuplicateName` when the name is taken.
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// First item matching the filter
    async fn find_one(&self, filter: &ItemFilter) -> ItemResult<Option<Item>>;

    /// One page of the items matching the filter, plus totals over the whole match set
    async fn paginate(&self, filter: &ItemFilter, pagination: Pagination)
    -> ItemResult<Page<Item>>;

    /// Apply `changes` to the first match. Fails with `NoMatch` when nothing
    /// matches and with `DuplicateName` when renaming onto another item's name.
    async fn update(&self, filter: &ItemFilter, changes: ItemChanges) -> ItemResult<Item>;

    /// Remove the first match and return it. Fails with `NoMatch` when nothing matches.
    async fn delete(&self, filter: &ItemFilter) -> ItemResult<Item>;
}

/// Process-local item store
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;
        if items.iter().any(|item| item.name == input.name) {
            return Err(ItemError::DuplicateName(input.name));
        }

        let item = Item::new(input);
        items.push(item.clone());
        Ok(item)
    }

    async fn find_one(&self, filter: &ItemFilter) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| filter.matches(item)).cloned())
    }

    async fn paginate(
        &self,
        filter: &ItemFilter,
        pagination: Pagination,
    ) -> ItemResult<Page<Item>> {
        let items = self.items.read().await;
        let matching: Vec<&Item> = items.iter().filter(|item| filter.matches(item)).collect();

        let total_rows = matching.len() as u64;
        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(pagination.per_page).unwrap_or(usize::MAX);

        let rows = matching.into_iter().skip(skip).take(take).cloned().collect();

        Ok(Page {
            rows,
            meta: PaginationMeta::new(pagination, total_rows),
        })
    }

    async fn update(&self, filter: &ItemFilter, changes: ItemChanges) -> ItemResult<Item> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| filter.matches(item))
            .ok_or(ItemError::NoMatch)?;

        if let Some(name) = changes.name.as_deref() {
            let taken = items
                .iter()
                .enumerate()
                .any(|(other, item)| other != index && item.name == name);
            if taken {
                return Err(ItemError::DuplicateName(name.to_string()));
            }
        }

        let item = &mut items[index];
        item.apply(changes);
        Ok(item.clone())
    }

    async fn delete(&self, filter: &ItemFilter) -> ItemResult<Item> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| filter.matches(item))
            .ok_or(ItemError::NoMatch)?;

        Ok(items.remove(index))
    }
}
