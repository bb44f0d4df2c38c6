use super::{
    ProductCommandService,
    attributes::{clean_description, parse_genders, parse_price, parse_sizes, parse_stock},
};
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{
        Product, ProductId, ProductSlug, ProductTitle, ProductUpdate, value_objects::normalize_tags,
    },
};

#[derive(Default)]
pub struct UpdateProductCommand {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl ProductCommandService {
    pub async fn update_product(&self, command: UpdateProductCommand) -> ApplicationResult<ProductDto> {
        let id = ProductId::parse(&command.id)?;
        let product = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|product| product.is_active)
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let UpdateProductCommand {
            id: _,
            title,
            slug,
            description,
            price,
            stock,
            sizes,
            gender,
            tags,
        } = command;

        let title = title.map(ProductTitle::new).transpose()?;
        let mut update = ProductUpdate::new(product.id, self.clock.now());

        if let Some(slug) = self
            .resolve_slug(&product, title.as_ref(), slug.as_deref())
            .await?
        {
            update = update.with_slug(slug);
        }
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(description) = description {
            update = update.with_description(clean_description(Some(description)));
        }
        if let Some(price) = parse_price(price)? {
            update = update.with_price(price);
        }
        if let Some(stock) = parse_stock(stock)? {
            update = update.with_stock(stock);
        }
        if let Some(sizes) = sizes {
            update = update.with_sizes(parse_sizes(sizes)?);
        }
        if let Some(gender) = gender {
            update = update.with_gender(parse_genders(gender)?);
        }
        if let Some(tags) = tags {
            update = update.with_tags(normalize_tags(tags));
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(product_id = %updated.id, slug = %updated.slug, "product updated");
        Ok(updated.into())
    }

    /// An explicit slug wins; otherwise a changed title re-derives it. The
    /// product itself is excluded so keeping its own slug is not a conflict.
    async fn resolve_slug(
        &self,
        product: &Product,
        title: Option<&ProductTitle>,
        explicit: Option<&str>,
    ) -> ApplicationResult<Option<ProductSlug>> {
        let candidate = match (explicit, title) {
            (Some(slug), _) => slug,
            (None, Some(title)) if title != &product.title => title.as_str(),
            _ => return Ok(None),
        };

        let slug = self
            .slug_service
            .generate_unique(candidate, Some(product.id))
            .await?;

        Ok((slug != product.slug).then_some(slug))
    }
}
