use async_trait::async_trait;
use hroone_core::Page;

use crate::models::{Order, PricedOrder};

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a priced order as a single insert; the store assigns the
    /// identifier. Orders are never updated after this write.
    async fn create_order(
        &self,
        order: PricedOrder,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>>;

    /// List a user's orders, ordered by id ascending, bounded by the page.
    /// The user id is expected in its folded lowercase form.
    async fn list_orders(
        &self,
        user_id: &str,
        page: Page,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;
}
