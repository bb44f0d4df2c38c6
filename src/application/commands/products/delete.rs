// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: String,
}

impl ProductCommandService {
    /// Soft delete: the row stays, so its slug remains taken.
    pub async fn delete_product(&self, command: DeleteProductCommand) -> ApplicationResult<()> {
        let id = ProductId::parse(&command.id)?;
        let product = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|product| product.is_active)
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        self.write_repo.soft_delete(product.id, self.clock.now()).await?;
        tracing::info!(product_id = %product.id, "product deactivated");
        Ok(())
    }
}
