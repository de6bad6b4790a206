pub mod models;
pub mod pricing;
pub mod repository;

pub use models::{Order, OrderDraft, OrderError, OrderItem, PricedOrder};
pub use pricing::OrderPricer;
pub use repository::OrderRepository;
