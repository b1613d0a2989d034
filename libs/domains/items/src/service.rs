//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{
    CreateItem, Item, ItemFilter, ListItemsQuery, NewItem, Page, Session, UpdateItem,
};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Validates input, attaches the session owner and turns unresolved ids into
/// `NotFound`. Name uniqueness is enforced by the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List one page of items matching the query's filters
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ListItemsQuery) -> ItemResult<Page<Item>> {
        query.validate()?;
        self.repository
            .paginate(&query.filter(), query.pagination())
            .await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository
            .find_one(&ItemFilter::by_id(id))
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item owned by the session's user
    #[instrument(skip(self, input), fields(item_name = %input.name, user_id = %session.user_id))]
    pub async fn create_item(&self, input: CreateItem, session: &Session) -> ItemResult<Item> {
        input.validate()?;

        let item = self
            .repository
            .create(NewItem::from_input(input, session))
            .await?;

        info!(item_id = %item.id, "Item created");
        Ok(item)
    }

    /// Update an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;

        let item = self
            .repository
            .update(&ItemFilter::by_id(id), input.into())
            .await
            .map_err(|e| not_found_for(id, e))?;

        info!(item_id = %item.id, "Item updated");
        Ok(item)
    }

    /// Delete an item, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<Item> {
        let item = self
            .repository
            .delete(&ItemFilter::by_id(id))
            .await
            .map_err(|e| not_found_for(id, e))?;

        info!(item_id = %item.id, "Item deleted");
        Ok(item)
    }
}

fn not_found_for(id: Uuid, err: ItemError) -> ItemError {
    match err {
        ItemError::NoMatch => ItemError::NotFound(id),
        other => other,
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DEMO_USER_ID, ItemChanges, Pagination, PaginationMeta};
    use crate::repository::MockItemRepository;
    use chrono::{TimeZone, Utc};

    fn create_input(name: &str) -> CreateItem {
        CreateItem {
            brand: "Nike".to_string(),
            category: Category::Shoes,
            color: "Blue".to_string(),
            image_url: None,
            name: name.to_string(),
            purchase_date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            purchase_price: 129.99,
            size: "M".to_string(),
        }
    }

    fn stored(name: &str) -> Item {
        Item::new(NewItem::from_input(create_input(name), &Session::demo()))
    }

    #[tokio::test]
    async fn test_create_item_injects_session_user() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .withf(|input| input.user_id == DEMO_USER_ID && input.name == "Air Max 90")
            .times(1)
            .returning(|input| Ok(Item::new(input)));

        let service = ItemService::new(repo);
        let item = service
            .create_item(create_input("Air Max 90"), &Session::demo())
            .await
            .unwrap();

        assert_eq!(item.user_id, DEMO_USER_ID);
        assert_eq!(item.category, Category::Shoes);
    }

    #[tokio::test]
    async fn test_create_item_surfaces_duplicate_name() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .returning(|input| Err(ItemError::DuplicateName(input.name)));

        let service = ItemService::new(repo);
        let mut input = create_input("Air Max 90");
        input.brand = "Adidas".to_string();
        input.category = Category::Tops;

        let result = service.create_item(input, &Session::demo()).await;
        assert!(matches!(result, Err(ItemError::DuplicateName(name)) if name == "Air Max 90"));
    }

    #[tokio::test]
    async fn test_create_item_validates_before_touching_repository() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().never();

        let service = ItemService::new(repo);
        let mut input = create_input("Air Max 90");
        input.purchase_price = -5.0;

        let result = service.create_item(input, &Session::demo()).await;
        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_one().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let id = Uuid::new_v4();
        let result = service.get_item(id).await;
        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_list_items_wires_filters_and_paging() {
        let mut repo = MockItemRepository::new();
        repo.expect_paginate()
            .withf(|filter, pagination| {
                filter.category == Some(Category::Shoes)
                    && filter.color.as_deref() == Some("Blue")
                    && filter.id.is_none()
                    && *pagination == Pagination::new(2, 5)
            })
            .times(1)
            .returning(|_, pagination| {
                Ok(Page {
                    rows: vec![],
                    meta: PaginationMeta::new(pagination, 0),
                })
            });

        let service = ItemService::new(repo);
        let query = ListItemsQuery {
            page: 2,
            count: 5,
            category: Some(Category::Shoes),
            color: Some("Blue".to_string()),
            ..Default::default()
        };

        let page = service.list_items(query).await.unwrap();
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.per_page, 5);
    }

    #[tokio::test]
    async fn test_update_item_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().returning(|_, _| Err(ItemError::NoMatch));

        let service = ItemService::new(repo);
        let id = Uuid::new_v4();
        let result = service.update_item(id, UpdateItem::default()).await;
        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_item_passes_only_supplied_fields() {
        let existing = stored("Air Max 90");
        let id = existing.id;

        let mut repo = MockItemRepository::new();
        repo.expect_update()
            .withf(move |filter, changes| {
                filter.id == Some(id)
                    && *changes
                        == ItemChanges {
                            purchase_price: Some(149.99),
                            ..Default::default()
                        }
            })
            .times(1)
            .returning(move |_, changes| {
                let mut item = existing.clone();
                item.apply(changes);
                Ok(item)
            });

        let service = ItemService::new(repo);
        let input = UpdateItem {
            purchase_price: Some(149.99),
            ..Default::default()
        };

        let item = service.update_item(id, input).await.unwrap();
        assert_eq!(item.purchase_price, 149.99);
        assert_eq!(item.name, "Air Max 90");
    }

    #[tokio::test]
    async fn test_update_item_surfaces_rename_clash() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().returning(|_, changes| {
            Err(ItemError::DuplicateName(changes.name.unwrap_or_default()))
        });

        let service = ItemService::new(repo);
        let input = UpdateItem {
            name: Some("Ultra Boost".to_string()),
            ..Default::default()
        };

        let result = service.update_item(Uuid::new_v4(), input).await;
        assert!(matches!(result, Err(ItemError::DuplicateName(name)) if name == "Ultra Boost"));
    }

    #[tokio::test]
    async fn test_update_item_validates_before_touching_repository() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().never();

        let service = ItemService::new(repo);
        let input = UpdateItem {
            name: Some(String::new()),
            ..Default::default()
        };

        let result = service.update_item(Uuid::new_v4(), input).await;
        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_item_maps_missing_to_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().returning(|_| Err(ItemError::NoMatch));

        let service = ItemService::new(repo);
        let id = Uuid::new_v4();
        let result = service.delete_item(id).await;
        assert!(matches!(result, Err(ItemError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_item_returns_removed_record() {
        let existing = stored("Air Max 90");
        let id = existing.id;

        let mut repo = MockItemRepository::new();
        let removed = existing.clone();
        repo.expect_delete()
            .withf(move |filter| filter.id == Some(id))
            .returning(move |_| Ok(removed.clone()));

        let service = ItemService::new(repo);
        assert_eq!(service.delete_item(id).await.unwrap(), existing);
    }
}
