use chrono::{DateTime, Utc};
use hroone_core::normalize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of an order. The product id is a weak reference into the
/// catalog; the line is priced at order creation and never re-priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A persisted order. Immutable once created; the item list keeps the
/// requested line order, and duplicate product ids stay separate lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// An order request as it enters the pricing engine, before validation.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: String,
    pub items: Vec<OrderItem>,
}

/// A draft that passed validation and product resolution, carrying the
/// total computed from live catalog prices. Ready for a single insert.
#[derive(Debug, Clone)]
pub struct PricedOrder {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("user_id must not be empty")]
    EmptyUserId,

    #[error("items must not be empty")]
    EmptyItems,

    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("one or more products not found")]
    ProductsNotFound,

    #[error("product lookup failed: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.user_id.trim().is_empty() {
            return Err(OrderError::EmptyUserId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::ZeroQuantity);
        }
        Ok(())
    }

    /// Fold the user id so matching and storage are case-insensitive.
    /// Product ids are UUIDs and already case-insensitive by construction.
    pub fn normalized(self) -> Self {
        Self {
            user_id: normalize::fold(&self.user_id),
            items: self.items,
        }
    }
}
