// src/domain/product/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::repository::ProductReadRepository;
use crate::domain::product::value_objects::{ProductId, ProductSlug};

/// Domain service responsible for producing unique slugs for products.
///
/// The uniqueness check is advisory: nothing is locked between the lookup
/// and the caller's write, so two concurrent requests can both pass it. The
/// store's unique constraint on `slug` stays authoritative and its
/// violations surface as [`DomainError::SlugConflict`] as well.
pub struct ProductSlugService {
    read_repo: Arc<dyn ProductReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ProductSlugService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn generate(&self, input: &str) -> DomainResult<ProductSlug> {
        self.generator.generate(input)
    }

    pub fn is_valid(&self, slug: &str) -> bool {
        ProductSlug::is_valid(slug)
    }

    /// Normalizes `input` and fails with [`DomainError::SlugConflict`] when
    /// another product already holds the result. Collisions are never
    /// resolved by suffixing.
    pub async fn generate_unique(
        &self,
        input: &str,
        exclude_id: Option<ProductId>,
    ) -> DomainResult<ProductSlug> {
        let slug = self.generator.generate(input)?;

        let taken = self
            .read_repo
            .slug_exists(&slug, exclude_id)
            .await
            .inspect_err(|err| {
                tracing::error!(error = %err, slug = %slug, "slug lookup failed");
            })?;

        if taken {
            tracing::warn!(slug = %slug, "slug already exists");
            return Err(DomainError::SlugConflict(slug.into_inner()));
        }

        tracing::info!(slug = %slug, "slug is unique and available");
        Ok(slug)
    }

    /// Checks a caller-supplied slug as-is. A string that is not a
    /// structurally valid slug cannot be stored, so it never exists.
    pub async fn exists(&self, slug: &str, exclude_id: Option<ProductId>) -> DomainResult<bool> {
        let Ok(slug) = ProductSlug::new(slug) else {
            tracing::debug!(slug, "not a canonical slug; skipping lookup");
            return Ok(false);
        };
        self.read_repo.slug_exists(&slug, exclude_id).await
    }
}
