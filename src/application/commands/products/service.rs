// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::product::{ProductReadRepository, ProductWriteRepository, services::ProductSlugService},
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) slug_service: Arc<ProductSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        slug_service: Arc<ProductSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
