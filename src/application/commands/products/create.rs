// src/application/commands/products/create.rs
use super::{
    ProductCommandService,
    attributes::{clean_description, parse_genders, parse_price, parse_sizes, parse_stock},
};
use crate::{
    application::{dto::ProductDto, error::ApplicationResult},
    domain::product::{NewProduct, ProductId, ProductTitle, value_objects::normalize_tags},
};

pub struct CreateProductCommand {
    pub title: String,
    /// Explicit slug candidate; the title is slugged when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sizes: Vec<String>,
    pub gender: Vec<String>,
    pub tags: Vec<String>,
}

impl CreateProductCommand {
    pub fn builder() -> CreateProductCommandBuilder {
        CreateProductCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateProductCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    stock: Option<i64>,
    sizes: Vec<String>,
    gender: Vec<String>,
    tags: Vec<String>,
}

impl CreateProductCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.sizes.push(size.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender.push(gender.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateProductCommand, &'static str> {
        Ok(CreateProductCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            description: self.description,
            price: self.price,
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            tags: self.tags,
        })
    }
}

impl ProductCommandService {
    pub async fn create_product(&self, command: CreateProductCommand) -> ApplicationResult<ProductDto> {
        let title = ProductTitle::new(command.title)?;
        let sizes = parse_sizes(command.sizes)?;
        let gender = parse_genders(command.gender)?;
        let price = parse_price(command.price)?.unwrap_or_default();
        let stock = parse_stock(command.stock)?.unwrap_or_default();

        let candidate = command.slug.as_deref().unwrap_or_else(|| title.as_str());
        let slug = self.slug_service.generate_unique(candidate, None).await?;

        let new_product = NewProduct {
            id: ProductId::generate(),
            title,
            slug,
            description: clean_description(command.description),
            price,
            stock,
            sizes,
            gender,
            tags: normalize_tags(command.tags),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_product).await?;
        tracing::info!(product_id = %created.id, slug = %created.slug, "product created");
        Ok(created.into())
    }
}
