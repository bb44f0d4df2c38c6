use super::ProductQueryService;
use crate::application::{
    dto::{Page, ProductDto},
    error::ApplicationResult,
};

pub struct ListProductsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

impl ProductQueryService {
    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Page<ProductDto>> {
        let limit = normalize_limit(query.limit);
        let offset = query.offset.unwrap_or(0);

        let (records, total) = self.read_repo.list_active(limit, offset).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, limit, offset))
    }
}

fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(value) => value.min(MAX_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_limit;

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(normalize_limit(None), 10);
        assert_eq!(normalize_limit(Some(0)), 10);
        assert_eq!(normalize_limit(Some(25)), 25);
        assert_eq!(normalize_limit(Some(1_000)), 100);
    }
}
