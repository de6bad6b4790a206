use std::net::SocketAddr;
use std::sync::Arc;

use hroone_api::{app, AppState};
use hroone_catalog::ProductRepository;
use hroone_order::{OrderPricer, OrderRepository};
use hroone_store::{DbClient, StoreOrderRepository, StoreProductRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hroone_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = hroone_store::app_config::Config::load()?;
    tracing::info!("Starting Hroone API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url).await?;
    db.migrate().await?;

    let products: Arc<dyn ProductRepository> =
        Arc::new(StoreProductRepository::new(db.pool.clone()));
    let orders: Arc<dyn OrderRepository> = Arc::new(StoreOrderRepository::new(db.pool.clone()));
    let pricer = Arc::new(OrderPricer::new(products.clone()));

    let app = app(AppState { products, orders, pricer });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
