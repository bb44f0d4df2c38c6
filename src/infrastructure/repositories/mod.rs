// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_product;

pub use error::{map_sqlx, map_sqlx_for_slug};
pub use postgres_product::{PostgresProductReadRepository, PostgresProductWriteRepository};
