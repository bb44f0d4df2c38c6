use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::{ProductId, ProductSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Write side of the product store.
///
/// Implementations must enforce slug uniqueness themselves (e.g. with a
/// unique constraint) and report a violation as
/// [`DomainError::SlugConflict`](crate::domain::errors::DomainError::SlugConflict)
/// carrying the rejected slug.
#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn soft_delete(&self, id: ProductId, now: DateTime<Utc>) -> DomainResult<()>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &ProductSlug) -> DomainResult<Option<Product>>;
    async fn list_active(&self, limit: u32, offset: u64) -> DomainResult<(Vec<Product>, u64)>;
    /// Whether any stored product other than `exclude` holds `slug`.
    /// Active and soft-deleted rows both count. Absence is `Ok(false)`.
    async fn slug_exists(
        &self,
        slug: &ProductSlug,
        exclude: Option<ProductId>,
    ) -> DomainResult<bool>;
}
