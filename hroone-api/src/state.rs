use std::sync::Arc;

use hroone_catalog::ProductRepository;
use hroone_order::{OrderPricer, OrderRepository};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub pricer: Arc<OrderPricer>,
}
