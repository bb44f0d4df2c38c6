use super::ProductQueryService;
use crate::{
    application::{dto::SlugAvailabilityDto, error::ApplicationResult},
    domain::product::ProductId,
};

/// Pre-check for a user-chosen slug before other changes are committed.
pub struct CheckSlugAvailabilityQuery {
    pub slug: String,
    pub exclude_id: Option<String>,
}

impl ProductQueryService {
    pub async fn check_slug_availability(
        &self,
        query: CheckSlugAvailabilityQuery,
    ) -> ApplicationResult<SlugAvailabilityDto> {
        let exclude_id = query
            .exclude_id
            .as_deref()
            .map(ProductId::parse)
            .transpose()?;

        let taken = self.slug_service.exists(&query.slug, exclude_id).await?;
        Ok(SlugAvailabilityDto {
            available: !taken && self.slug_service.is_valid(&query.slug),
            slug: query.slug,
        })
    }
}
