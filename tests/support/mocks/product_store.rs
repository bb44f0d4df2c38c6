// tests/support/mocks/product_store.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use catalog_core::domain::errors::{DomainError, DomainResult};
use catalog_core::domain::product::{
    NewProduct, Product, ProductId, ProductReadRepository, ProductSlug, ProductUpdate,
    ProductWriteRepository,
};

/// In-memory product table. Writes enforce unique `slug` and `title` the way
/// the database constraints do.
#[derive(Default)]
pub struct InMemoryProductStore {
    rows: Mutex<Vec<Product>>,
    /// When set, slug lookups always answer "free", simulating a concurrent
    /// writer that commits between the check and the insert.
    stale_slug_checks: AtomicBool,
    fail_lookups: AtomicBool,
    slug_lookups: AtomicUsize,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, product: Product) {
        self.rows.lock().unwrap().push(product);
    }

    pub fn rows(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }

    pub fn set_stale_slug_checks(&self, stale: bool) {
        self.stale_slug_checks.store(stale, Ordering::SeqCst);
    }

    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn slug_lookups(&self) -> usize {
        self.slug_lookups.load(Ordering::SeqCst)
    }

    fn check_unique(
        rows: &[Product],
        id: ProductId,
        slug: &ProductSlug,
        title: &str,
    ) -> DomainResult<()> {
        let others = rows.iter().filter(|p| p.id != id);
        for other in others {
            if &other.slug == slug {
                return Err(DomainError::SlugConflict(slug.as_str().to_string()));
            }
            if other.title.as_str() == title {
                return Err(DomainError::Conflict("title already exists".into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryProductStore {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut rows = self.rows.lock().unwrap();
        Self::check_unique(&rows, product.id, &product.slug, product.title.as_str())?;
        let product = product.into_product();
        rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut rows = self.rows.lock().unwrap();
        let index = rows
            .iter()
            .position(|p| p.id == update.id && p.is_active)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        let mut candidate = rows[index].clone();
        update.apply_to(&mut candidate);
        Self::check_unique(&rows, candidate.id, &candidate.slug, candidate.title.as_str())?;
        rows[index] = candidate.clone();
        Ok(candidate)
    }

    async fn soft_delete(&self, id: ProductId, now: DateTime<Utc>) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let product = rows
            .iter_mut()
            .find(|p| p.id == id && p.is_active)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        product.deactivate(now);
        Ok(())
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryProductStore {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ProductSlug) -> DomainResult<Option<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.slug == slug)
            .cloned())
    }

    async fn list_active(&self, limit: u32, offset: u64) -> DomainResult<(Vec<Product>, u64)> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Product> = rows.iter().filter(|p| p.is_active).cloned().collect();
        active.sort_by_key(|p| (p.created_at, Uuid::from(p.id)));
        let total = active.len() as u64;
        let page = active
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn slug_exists(
        &self,
        slug: &ProductSlug,
        exclude: Option<ProductId>,
    ) -> DomainResult<bool> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        if self.stale_slug_checks.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|p| &p.slug == slug && Some(p.id) != exclude))
    }
}
