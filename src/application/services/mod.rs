// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::products::ProductCommandService,
        ports::{ClockPort, SlugGeneratorPort},
        queries::products::ProductQueryService,
    },
    domain::product::{ProductReadRepository, ProductWriteRepository, services::ProductSlugService},
};

pub struct ApplicationServices {
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
}

impl ApplicationServices {
    pub fn new(
        product_write_repo: Arc<dyn ProductWriteRepository>,
        product_read_repo: Arc<dyn ProductReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(ProductSlugService::new(
            Arc::clone(&product_read_repo),
            Arc::clone(&slugger),
        ));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_write_repo),
            Arc::clone(&product_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let product_queries = Arc::new(ProductQueryService::new(
            Arc::clone(&product_read_repo),
            slug_service,
        ));

        Self {
            product_commands,
            product_queries,
        }
    }
}
