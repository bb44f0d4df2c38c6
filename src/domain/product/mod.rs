pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductUpdate};
pub use repository::{ProductReadRepository, ProductWriteRepository};
pub use value_objects::{
    Gender, ProductId, ProductPrice, ProductSize, ProductSlug, ProductStock, ProductTitle,
};
