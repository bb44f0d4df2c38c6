// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use catalog_core::application::ports::{ClockPort, SlugGeneratorPort};
use catalog_core::application::services::ApplicationServices;
use catalog_core::domain::product::{
    Gender, NewProduct, Product, ProductId, ProductPrice, ProductSize, ProductSlug, ProductStock,
    ProductTitle,
};
use catalog_core::infrastructure::util::DefaultSlugGenerator;
use catalog_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{FixedClock, InMemoryProductStore, fixed_now};

pub fn build_services(store: Arc<InMemoryProductStore>) -> ApplicationServices {
    let clock: Arc<ClockPort> = Arc::new(FixedClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(store.clone(), store, clock, slugger)
}

pub fn make_test_router(store: Arc<InMemoryProductStore>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(store)),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn sample_product(title: &str, slug: &str) -> Product {
    NewProduct {
        id: ProductId::generate(),
        title: ProductTitle::new(title).unwrap(),
        slug: ProductSlug::new(slug).unwrap(),
        description: None,
        price: ProductPrice::new(49.9).unwrap(),
        stock: ProductStock::new(5).unwrap(),
        sizes: vec![ProductSize::M, ProductSize::L],
        gender: vec![Gender::Unisex],
        tags: vec!["shoes".into()],
        created_at: fixed_now(),
    }
    .into_product()
}

pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
