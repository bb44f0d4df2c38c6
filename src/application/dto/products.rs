use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: Vec<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            title: product.title.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description,
            price: product.price.value(),
            stock: product.stock.value(),
            sizes: product.sizes.iter().map(ToString::to_string).collect(),
            gender: product.gender.iter().map(ToString::to_string).collect(),
            tags: product.tags,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugAvailabilityDto {
    pub slug: String,
    pub available: bool,
}
