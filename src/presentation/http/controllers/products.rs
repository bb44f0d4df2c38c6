// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::{ProductDto, SlugAvailabilityDto},
    queries::products::{
        CheckSlugAvailabilityQuery, GetProductByIdQuery, GetProductBySlugQuery, ListProductsQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ProductListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SlugAvailabilityParams {
    pub slug: String,
    #[serde(default)]
    pub exclude_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub gender: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Active products, oldest first.", body = ProductListResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<ProductListResponse>> {
    state
        .services
        .product_queries
        .list_products(ListProductsQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "The product.", body = ProductDto),
        (status = 404, description = "No active product with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_id(GetProductByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/by-slug/{slug}",
    params(("slug" = String, Path, description = "Canonical product slug")),
    responses(
        (status = 200, description = "The product.", body = ProductDto),
        (status = 400, description = "Not a canonical slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No active product with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_slug(GetProductBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/slug-availability",
    params(SlugAvailabilityParams),
    responses(
        (status = 200, description = "Whether the slug can be used.", body = SlugAvailabilityDto)
    ),
    tag = "Products"
)]
pub async fn check_slug_availability(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugAvailabilityParams>,
) -> HttpResult<Json<SlugAvailabilityDto>> {
    state
        .services
        .product_queries
        .check_slug_availability(CheckSlugAvailabilityQuery {
            slug: params.slug,
            exclude_id: params.exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug or title already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        price: payload.price,
        stock: payload.stock,
        sizes: payload.sizes,
        gender: payload.gender,
        tags: payload.tags,
    };

    state
        .services
        .product_commands
        .create_product(command)
        .await
        .into_http()
        .map(|product| (StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated.", body = ProductDto),
        (status = 404, description = "No active product with this id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug or title already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        price: payload.price,
        stock: payload.stock,
        sizes: payload.sizes,
        gender: payload.gender,
        tags: payload.tags,
    };

    state
        .services
        .product_commands
        .update_product(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 204, description = "Product deactivated."),
        (status = 404, description = "No active product with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
