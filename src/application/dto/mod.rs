pub mod pagination;
pub mod products;

pub use pagination::Page;
pub use products::{ProductDto, SlugAvailabilityDto};
