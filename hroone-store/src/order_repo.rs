use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hroone_core::Page;
use hroone_order::{Order, OrderItem, OrderRepository, PricedOrder};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreOrderRepository {
    pool: PgPool,
}

impl StoreOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying. Items live in a JSONB column:
// the order is one denormalized row and creation is a single insert.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: String,
    items: Json<Vec<OrderItem>>,
    total: f64,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            user_id: row.user_id,
            items: row.items.0,
            total: row.total,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn create_order(
        &self,
        order: PricedOrder,
    ) -> Result<Order, Box<dyn std::error::Error + Send + Sync>> {
        let order = Order {
            id: Uuid::now_v7(),
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, items, total, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(order.id)
        .bind(&order.user_id)
        .bind(Json(&order.items))
        .bind(order.total)
        .bind(order.created_at)
        .execute(&self.pool)
        .await?;

        Ok(order)
    }

    async fn list_orders(
        &self,
        user_id: &str,
        page: Page,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, items, total, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }
}
