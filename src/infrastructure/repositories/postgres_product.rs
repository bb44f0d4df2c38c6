// src/infrastructure/repositories/postgres_product.rs
use super::{map_sqlx, map_sqlx_for_slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    Gender, NewProduct, Product, ProductId, ProductPrice, ProductReadRepository, ProductSize,
    ProductSlug, ProductStock, ProductTitle, ProductUpdate, ProductWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, title, slug, description, price::float8 AS price, stock, \
     sizes, gender, tags, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProductWriteRepository {
    pool: PgPool,
}

impl PostgresProductWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    title: String,
    slug: String,
    description: Option<String>,
    price: f64,
    stock: i32,
    sizes: Vec<String>,
    gender: Vec<String>,
    tags: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id),
            title: ProductTitle::new(row.title)?,
            slug: ProductSlug::new(row.slug)?,
            description: row.description,
            price: ProductPrice::new(row.price)?,
            stock: ProductStock::new(i64::from(row.stock))?,
            sizes: row
                .sizes
                .iter()
                .map(|s| s.parse::<ProductSize>())
                .collect::<Result<_, _>>()?,
            gender: row
                .gender
                .iter()
                .map(|g| g.parse::<Gender>())
                .collect::<Result<_, _>>()?,
            tags: row.tags,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn size_labels(sizes: &[ProductSize]) -> Vec<String> {
    sizes.iter().map(ToString::to_string).collect()
}

fn gender_labels(gender: &[Gender]) -> Vec<String> {
    gender.iter().map(ToString::to_string).collect()
}

#[async_trait]
impl ProductWriteRepository for PostgresProductWriteRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            id,
            title,
            slug,
            description,
            price,
            stock,
            sizes,
            gender,
            tags,
            created_at,
        } = product;

        let sql = format!(
            "INSERT INTO products (id, title, slug, description, price, stock, sizes, gender, tags, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, ($5::float8)::numeric(10, 2), $6, $7, $8, $9, TRUE, $10, $10)
             RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(Uuid::from(id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(description)
            .bind(price.value())
            .bind(stock.value())
            .bind(size_labels(&sizes))
            .bind(gender_labels(&gender))
            .bind(tags)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx_for_slug(err, Some(&slug)))?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            title,
            slug,
            description,
            price,
            stock,
            sizes,
            gender,
            tags,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = &slug {
            builder.push(", slug = ");
            builder.push_bind(slug.as_str().to_string());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }

        if let Some(price) = price {
            builder.push(", price = (");
            builder.push_bind(price.value());
            builder.push("::float8)::numeric(10, 2)");
        }

        if let Some(stock) = stock {
            builder.push(", stock = ");
            builder.push_bind(stock.value());
        }

        if let Some(sizes) = sizes {
            builder.push(", sizes = ");
            builder.push_bind(size_labels(&sizes));
        }

        if let Some(gender) = gender {
            builder.push(", gender = ");
            builder.push_bind(gender_labels(&gender));
        }

        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" AND is_active = TRUE RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_for_slug(err, slug.as_ref()))?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn soft_delete(&self, id: ProductId, now: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE products SET is_active = FALSE, updated_at = $2 WHERE id = $1 AND is_active = TRUE",
        )
        .bind(Uuid::from(id))
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ProductSlug) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list_active(&self, limit: u32, offset: u64) -> DomainResult<(Vec<Product>, u64)> {
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::Validation("offset is out of range".into()))?;

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active = TRUE
             ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, u64::try_from(total).unwrap_or_default()))
    }

    async fn slug_exists(
        &self,
        slug: &ProductSlug,
        exclude: Option<ProductId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM products
                 WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(Uuid::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
