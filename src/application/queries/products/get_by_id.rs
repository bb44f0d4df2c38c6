use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct GetProductByIdQuery {
    pub id: String,
}

impl ProductQueryService {
    pub async fn get_product_by_id(&self, query: GetProductByIdQuery) -> ApplicationResult<ProductDto> {
        let id = ProductId::parse(&query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|product| product.is_active)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }
}
