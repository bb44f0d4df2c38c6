// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod product_store;
pub mod time;

pub use product_store::InMemoryProductStore;
pub use time::{FixedClock, fixed_now};
