//! Request bodies for the item endpoints.
//!
//! Bodies are read as loosely typed JSON and checked field by field, so a
//! missing field, a value of the wrong shape and a rule violation all end up
//! in one [`ValidationErrors`] keyed by the camelCase field name.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::coerce;
use crate::models::{Category, CreateItem, UpdateItem};

/// Body of `POST /items`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemBody {
    brand: Option<Value>,
    category: Option<Value>,
    color: Option<Value>,
    image_url: Option<Value>,
    name: Option<Value>,
    purchase_date: Option<Value>,
    purchase_price: Option<Value>,
    size: Option<Value>,
}

/// Body of `PATCH /items/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemBody {
    brand: Option<Value>,
    category: Option<Value>,
    color: Option<Value>,
    image_url: Option<Value>,
    name: Option<Value>,
    purchase_price: Option<Value>,
    size: Option<Value>,
}

impl CreateItemBody {
    fn read(&self) -> Result<CreateItem, ValidationErrors> {
        let mut fields = Fields::default();

        let brand = fields.required_text("brand", "Brand", &self.brand);
        let category = fields
            .present("category", "Category", &self.category)
            .and_then(|value| fields.category(value));
        let color = fields.required_text("color", "Color", &self.color);
        let image_url = self
            .image_url
            .as_ref()
            .and_then(|value| fields.image_url(value));
        let name = fields.required_text("name", "Item name", &self.name);
        let purchase_date = fields
            .present("purchaseDate", "Purchase date", &self.purchase_date)
            .and_then(|value| fields.purchase_date(value));
        let purchase_price = fields
            .present("purchasePrice", "Purchase price", &self.purchase_price)
            .and_then(|value| fields.purchase_price(value));
        let size = fields.required_text("size", "Size", &self.size);

        match (brand, category, color, name, purchase_date, purchase_price, size) {
            (
                Some(brand),
                Some(category),
                Some(color),
                Some(name),
                Some(purchase_date),
                Some(purchase_price),
                Some(size),
            ) if fields.is_clean() => Ok(CreateItem {
                brand,
                category,
                color,
                image_url,
                name,
                purchase_date,
                purchase_price,
                size,
            }),
            _ => Err(fields.errors),
        }
    }
}

impl UpdateItemBody {
    fn read(&self) -> Result<UpdateItem, ValidationErrors> {
        let mut fields = Fields::default();

        let input = UpdateItem {
            brand: fields.optional_text("brand", "Brand", &self.brand),
            category: self
                .category
                .as_ref()
                .and_then(|value| fields.category(value)),
            color: fields.optional_text("color", "Color", &self.color),
            image_url: self
                .image_url
                .as_ref()
                .and_then(|value| fields.image_url(value)),
            name: fields.optional_text("name", "Item name", &self.name),
            purchase_price: self
                .purchase_price
                .as_ref()
                .and_then(|value| fields.purchase_price(value)),
            size: fields.optional_text("size", "Size", &self.size),
        };

        if fields.is_clean() {
            Ok(input)
        } else {
            Err(fields.errors)
        }
    }
}

impl Validate for CreateItemBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.read().map(|_| ())
    }
}

impl Validate for UpdateItemBody {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.read().map(|_| ())
    }
}

impl TryFrom<CreateItemBody> for CreateItem {
    type Error = ValidationErrors;

    fn try_from(body: CreateItemBody) -> Result<Self, Self::Error> {
        body.read()
    }
}

impl TryFrom<UpdateItemBody> for UpdateItem {
    type Error = ValidationErrors;

    fn try_from(body: UpdateItemBody) -> Result<Self, Self::Error> {
        body.read()
    }
}

/// Collects one error per failing field while a body is read.
#[derive(Default)]
struct Fields {
    errors: ValidationErrors,
}

impl Fields {
    fn reject(&mut self, field: &'static str, code: &'static str, message: String) {
        self.errors
            .add(field, ValidationError::new(code).with_message(message.into()));
    }

    fn is_clean(&self) -> bool {
        self.errors.errors().is_empty()
    }

    /// Missing and `null` both count as absent.
    fn present<'a>(
        &mut self,
        field: &'static str,
        label: &str,
        value: &'a Option<Value>,
    ) -> Option<&'a Value> {
        if value.is_none() {
            self.reject(field, "required", format!("{label} is required"));
        }
        value.as_ref()
    }

    fn required_text(
        &mut self,
        field: &'static str,
        label: &str,
        value: &Option<Value>,
    ) -> Option<String> {
        let value = self.present(field, label, value)?;
        self.text(field, label, value, "is required")
    }

    fn optional_text(
        &mut self,
        field: &'static str,
        label: &str,
        value: &Option<Value>,
    ) -> Option<String> {
        let value = value.as_ref()?;
        self.text(field, label, value, "must not be empty")
    }

    fn text(
        &mut self,
        field: &'static str,
        label: &str,
        value: &Value,
        when_empty: &str,
    ) -> Option<String> {
        match value.as_str() {
            Some("") => {
                self.reject(field, "length", format!("{label} {when_empty}"));
                None
            }
            Some(text) => Some(text.to_string()),
            None => {
                self.reject(field, "type", format!("{label} must be a string"));
                None
            }
        }
    }

    fn image_url(&mut self, value: &Value) -> Option<String> {
        let url = value.as_str().map(str::to_string);
        if url.is_none() {
            self.reject("imageUrl", "type", "Image URL must be a string".to_string());
        }
        url
    }

    fn category(&mut self, value: &Value) -> Option<Category> {
        let category = value
            .as_str()
            .and_then(|raw| Category::from_str(raw).ok());
        if category.is_none() {
            self.reject("category", "enum", "Category must be valid".to_string());
        }
        category
    }

    fn purchase_date(&mut self, value: &Value) -> Option<DateTime<Utc>> {
        let date = coerce::purchase_date(value);
        if date.is_none() {
            self.reject(
                "purchaseDate",
                "date",
                "Purchase date must be valid".to_string(),
            );
        }
        date
    }

    fn purchase_price(&mut self, value: &Value) -> Option<f64> {
        match coerce::purchase_price(value) {
            Some(price) if price < 0.0 => {
                self.reject(
                    "purchasePrice",
                    "range",
                    "Purchase price must not be negative".to_string(),
                );
                None
            }
            Some(price) => Some(price),
            None => {
                self.reject(
                    "purchasePrice",
                    "number",
                    "Purchase price must be a number".to_string(),
                );
                None
            }
        }
    }
}
