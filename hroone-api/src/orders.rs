use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hroone_core::{normalize, Page};
use hroone_order::{Order, OrderDraft, OrderItem};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub total: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub product_id: Uuid,
    pub quantity: u32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            total: order.total,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{user_id}", get(list_orders))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /orders
/// Price an order against the catalog and persist it in a single insert.
/// Fails with 400 "one or more products not found" if any id is unresolvable.
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let draft = OrderDraft {
        user_id: req.user_id,
        items: req
            .items
            .into_iter()
            .map(|item| OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect(),
    };

    // Pricing happens entirely before the insert; a rejected draft writes
    // nothing.
    let priced = state.pricer.price_order(draft).await?;

    let order = state
        .orders
        .create_order(priced)
        .await
        .map_err(ApiError::store)?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /orders/{user_id}
/// List a user's orders, oldest first
pub async fn list_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let page = Page::new(query.limit, query.offset)?;
    let user_id = normalize::fold(&user_id);

    let orders = state
        .orders
        .list_orders(&user_id, page)
        .await
        .map_err(ApiError::store)?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
