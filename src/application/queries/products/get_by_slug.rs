use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductSlug,
};

pub struct GetProductBySlugQuery {
    pub slug: String,
}

impl ProductQueryService {
    pub async fn get_product_by_slug(
        &self,
        query: GetProductBySlugQuery,
    ) -> ApplicationResult<ProductDto> {
        let slug = ProductSlug::new(query.slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|product| product.is_active)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }
}
