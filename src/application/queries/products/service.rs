use std::sync::Arc;

use crate::domain::product::{ProductReadRepository, services::ProductSlugService};

pub struct ProductQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) slug_service: Arc<ProductSlugService>,
}

impl ProductQueryService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        slug_service: Arc<ProductSlugService>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
        }
    }
}
