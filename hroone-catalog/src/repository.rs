use async_trait::async_trait;
use hroone_core::{normalize, Page};
use uuid::Uuid;

use crate::product::{NewProduct, Product};

/// Listing filter. Inputs are folded to lowercase on construction so the
/// match semantics (substring on name, exact on size) run against the
/// stored lowercase fields. Empty strings count as "no filter".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub size: Option<String>,
}

impl ProductFilter {
    pub fn new(name: Option<String>, size: Option<String>) -> Self {
        Self {
            name: normalize::fold_opt(name).filter(|v| !v.is_empty()),
            size: normalize::fold_opt(size).filter(|v| !v.is_empty()),
        }
    }

    /// Reference semantics for the filter; store implementations must agree.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if product.size.as_deref() != Some(size.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product; the store assigns the identifier.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, Box<dyn std::error::Error + Send + Sync>>;

    /// Batch lookup by id set. Returns at most one record per distinct id;
    /// an empty id set resolves to an empty result without a store round trip.
    async fn find_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// Filtered listing, ordered by id ascending, bounded by the page.
    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>>;
}
