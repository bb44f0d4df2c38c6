// src/application/ports/util.rs
use crate::domain::errors::DomainResult;
use crate::domain::product::ProductSlug;

/// Turns free text into a canonical slug. Implementations must be pure:
/// the same input always yields the same output.
pub trait SlugGenerator: Send + Sync {
    fn generate(&self, input: &str) -> DomainResult<ProductSlug>;
}
