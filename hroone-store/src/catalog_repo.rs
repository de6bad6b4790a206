use async_trait::async_trait;
use hroone_catalog::{NewProduct, Product, ProductFilter, ProductRepository};
use hroone_core::Page;
use sqlx::PgPool;
use uuid::Uuid;

pub struct StoreProductRepository {
    pool: PgPool,
}

impl StoreProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: f64,
    size: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            size: row.size,
        }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, Box<dyn std::error::Error + Send + Sync>> {
        // v7 ids sort by creation time, so ORDER BY id is insertion order
        let id = Uuid::now_v7();

        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, size)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.size)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            size: product.size,
        })
    }

    async fn find_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, size FROM products WHERE id = ANY($1)",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>> {
        // Filter values arrive lowercased; stored fields are lowercased on
        // write, so LIKE and equality give the case-insensitive semantics.
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, size
            FROM products
            WHERE ($1::TEXT IS NULL OR name LIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR size = $2)
            ORDER BY id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.name.as_deref())
        .bind(filter.size.as_deref())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
