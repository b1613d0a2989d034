use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Owner assigned to items created through the API until real authentication exists.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(0xe36a823b_9f05_4c44_8eec_454c36737ee2);

/// Clothing category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Accessories,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Tops,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Accessories,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Tops,
    ];
}

/// Item entity - a piece of clothing in someone's wardrobe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Nike")]
    pub brand: String,
    pub category: Category,
    #[schema(example = "Blue")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://example.com/image.jpg")]
    pub image_url: Option<String>,
    /// Item name, unique across the wardrobe
    #[schema(example = "Air Max 90")]
    pub name: String,
    #[schema(example = "2024-01-15T00:00:00Z")]
    pub purchase_date: DateTime<Utc>,
    #[schema(example = 129.99)]
    pub purchase_price: f64,
    #[schema(example = "M")]
    pub size: String,
    /// Owner of the item
    #[schema(example = "e36a823b-9f05-4c44-8eec-454c36737ee2")]
    pub user_id: Uuid,
}

/// Everything needed to store a new item; the id is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub brand: String,
    pub category: Category,
    pub color: String,
    pub image_url: Option<String>,
    pub name: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
    pub size: String,
    pub user_id: Uuid,
}

/// Partial update applied by the repository. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub brand: Option<String>,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub purchase_price: Option<f64>,
    pub size: Option<String>,
}

/// DTO for creating a new item
///
/// Requests arrive as [`CreateItemBody`](crate::payload::CreateItemBody) and are
/// converted once every field has been checked.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(length(min = 1, message = "Brand is required"))]
    #[schema(example = "Nike")]
    pub brand: String,
    pub category: Category,
    #[validate(length(min = 1, message = "Color is required"))]
    #[schema(example = "Blue")]
    pub color: String,
    #[serde(default)]
    #[schema(example = "https://example.com/image.jpg")]
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "Item name is required"))]
    #[schema(example = "Air Max 90")]
    pub name: String,
    /// `YYYY-MM-DD` or an RFC 3339 date-time
    #[schema(value_type = String, example = "2024-01-15")]
    pub purchase_date: DateTime<Utc>,
    /// Number or numeric string
    #[validate(range(min = 0.0, message = "Purchase price must not be negative"))]
    #[schema(value_type = f64, example = 129.99)]
    pub purchase_price: f64,
    #[validate(length(min = 1, message = "Size is required"))]
    #[schema(example = "M")]
    pub size: String,
}

/// DTO for updating an existing item
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "Brand must not be empty"))]
    pub brand: Option<String>,
    pub category: Option<Category>,
    #[validate(length(min = 1, message = "Color must not be empty"))]
    pub color: Option<String>,
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: Option<String>,
    /// Number or numeric string
    #[validate(range(min = 0.0, message = "Purchase price must not be negative"))]
    #[schema(value_type = Option<f64>, example = 149.99)]
    pub purchase_price: Option<f64>,
    #[validate(length(min = 1, message = "Size must not be empty"))]
    pub size: Option<String>,
}

impl From<UpdateItem> for ItemChanges {
    fn from(input: UpdateItem) -> Self {
        Self {
            brand: input.brand,
            category: input.category,
            color: input.color,
            image_url: input.image_url,
            name: input.name,
            purchase_price: input.purchase_price,
            size: input.size,
        }
    }
}

/// Exact-match filter. Absent fields never constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub id: Option<Uuid>,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub name: Option<String>,
    pub user_id: Option<Uuid>,
}

impl ItemFilter {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Returns true when every set field equals the item's field.
    pub fn matches(&self, item: &Item) -> bool {
        fn check<T: PartialEq + ?Sized>(wanted: Option<&T>, actual: &T) -> bool {
            wanted.is_none_or(|wanted| wanted == actual)
        }

        check(self.id.as_ref(), &item.id)
            && check(self.category.as_ref(), &item.category)
            && check(self.color.as_deref(), item.color.as_str())
            && check(self.brand.as_deref(), item.brand.as_str())
            && check(self.name.as_deref(), item.name.as_str())
            && check(self.user_id.as_ref(), &item.user_id)
    }
}

/// Query parameters for listing items
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(default = 1, minimum = 1)]
    pub page: u32,
    /// Items per page
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 100, message = "Count must be between 1 and 100"))]
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub count: u32,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub user_id: Option<Uuid>,
    pub brand: Option<String>,
    pub name: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_count() -> u32 {
    10
}

impl Default for ListItemsQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            count: default_count(),
            category: None,
            color: None,
            user_id: None,
            brand: None,
            name: None,
        }
    }
}

impl ListItemsQuery {
    pub fn filter(&self) -> ItemFilter {
        ItemFilter {
            id: None,
            category: self.category,
            color: self.color.clone(),
            brand: self.brand.clone(),
            name: self.name.clone(),
            user_id: self.user_id,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.count)
    }
}

/// Requested window: 1-based page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Number of rows before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(default_page(), default_count())
    }
}

/// Pagination metadata returned with list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 3)]
    pub total_pages: u64,
    #[schema(example = 25)]
    pub total_rows: u64,
}

impl PaginationMeta {
    pub fn new(pagination: Pagination, total_rows: u64) -> Self {
        let total_pages = match pagination.per_page {
            0 => 0,
            per_page => total_rows.div_ceil(u64::from(per_page)),
        };

        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total_pages,
            total_rows,
        }
    }
}

/// One window of a filtered result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub meta: PaginationMeta,
}

/// `{ "data": Item }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub data: Item,
}

impl From<Item> for ItemResponse {
    fn from(data: Item) -> Self {
        Self { data }
    }
}

/// `{ "data": [Item], "meta": PaginationMeta }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemListResponse {
    pub data: Vec<Item>,
    pub meta: PaginationMeta,
}

impl From<Page<Item>> for ItemListResponse {
    fn from(page: Page<Item>) -> Self {
        Self {
            data: page.rows,
            meta: page.meta,
        }
    }
}

/// Caller identity attached to mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
}

impl Session {
    /// Stand-in session used while the API has no authentication.
    pub fn demo() -> Self {
        Self {
            user_id: DEMO_USER_ID,
        }
    }
}

impl NewItem {
    pub fn from_input(input: CreateItem, session: &Session) -> Self {
        Self {
            brand: input.brand,
            category: input.category,
            color: input.color,
            image_url: input.image_url,
            name: input.name,
            purchase_date: input.purchase_date,
            purchase_price: input.purchase_price,
            size: input.size,
            user_id: session.user_id,
        }
    }
}

impl Item {
    /// Create a new item with a fresh v4 id
    pub fn new(input: NewItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            brand: input.brand,
            category: input.category,
            color: input.color,
            image_url: input.image_url,
            name: input.name,
            purchase_date: input.purchase_date,
            purchase_price: input.purchase_price,
            size: input.size,
            user_id: input.user_id,
        }
    }

    /// Overwrite every field present in `changes`
    pub fn apply(&mut self, changes: ItemChanges) {
        if let Some(brand) = changes.brand {
            self.brand = brand;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(purchase_price) = changes.purchase_price {
            self.purchase_price = purchase_price;
        }
        if let Some(size) = changes.size {
            self.size = size;
        }
    }
}
