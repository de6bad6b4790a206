use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hroone_catalog::{NewProduct, Product, ProductFilter};
use hroone_core::Page;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub size: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            size: product.size,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub name: Option<String>,
    pub size: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/products", post(create_product).get(list_products))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /products
/// Create a catalog product
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = NewProduct {
        name: req.name,
        description: req.description,
        price: req.price,
        size: req.size,
    };
    product.validate()?;
    let product = product.normalized();

    let created = state
        .products
        .create_product(product)
        .await
        .map_err(ApiError::store)?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /products
/// List products, filtered by name substring and/or exact size
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let page = Page::new(query.limit, query.offset)?;
    let filter = ProductFilter::new(query.name, query.size);

    let products = state
        .products
        .list_products(&filter, page)
        .await
        .map_err(ApiError::store)?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
