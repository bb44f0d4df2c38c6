// src/domain/product/entity.rs
use crate::domain::product::value_objects::{
    Gender, ProductId, ProductPrice, ProductSize, ProductSlug, ProductStock, ProductTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: ProductTitle,
    pub slug: ProductSlug,
    pub description: Option<String>,
    pub price: ProductPrice,
    pub stock: ProductStock,
    pub sizes: Vec<ProductSize>,
    pub gender: Vec<Gender>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: ProductId,
    pub title: ProductTitle,
    pub slug: ProductSlug,
    pub description: Option<String>,
    pub price: ProductPrice,
    pub stock: ProductStock,
    pub sizes: Vec<ProductSize>,
    pub gender: Vec<Gender>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub title: Option<ProductTitle>,
    pub slug: Option<ProductSlug>,
    pub description: Option<Option<String>>,
    pub price: Option<ProductPrice>,
    pub stock: Option<ProductStock>,
    pub sizes: Option<Vec<ProductSize>>,
    pub gender: Option<Vec<Gender>>,
    pub tags: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub fn new(id: ProductId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            price: None,
            stock: None,
            sizes: None,
            gender: None,
            tags: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ProductTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ProductSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_price(mut self, price: ProductPrice) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: ProductStock) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<ProductSize>) -> Self {
        self.sizes = Some(sizes);
        self
    }

    pub fn with_gender(mut self, gender: Vec<Gender>) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn apply_to(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(slug) = self.slug {
            product.slug = slug;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(sizes) = self.sizes {
            product.sizes = sizes;
        }
        if let Some(gender) = self.gender {
            product.gender = gender;
        }
        if let Some(tags) = self.tags {
            product.tags = tags;
        }
        product.updated_at = self.updated_at;
    }
}

impl NewProduct {
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            price: self.price,
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            tags: self.tags,
            is_active: true,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
