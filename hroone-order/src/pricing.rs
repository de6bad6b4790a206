use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use hroone_catalog::ProductRepository;
use uuid::Uuid;

use crate::models::{OrderDraft, OrderError, PricedOrder};

/// Resolves an order draft against live catalog prices.
///
/// Pricing is a pure read over a catalog snapshot: nothing is written and
/// nothing is locked, so a product deleted between the lookup here and the
/// order insert is an accepted inconsistency window, not an error.
pub struct OrderPricer {
    products: Arc<dyn ProductRepository>,
}

impl OrderPricer {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Validate the draft, resolve every referenced product in one batch
    /// lookup and compute the total per line item.
    ///
    /// Resolution is all-or-nothing: if any distinct product id cannot be
    /// resolved the whole order fails with `OrderError::ProductsNotFound`.
    /// Duplicate product ids stay separate lines and each contributes its
    /// own quantity times the unit price.
    pub async fn price_order(&self, draft: OrderDraft) -> Result<PricedOrder, OrderError> {
        draft.validate()?;
        let draft = draft.normalized();

        let distinct: BTreeSet<Uuid> = draft.items.iter().map(|item| item.product_id).collect();
        let ids: Vec<Uuid> = distinct.into_iter().collect();

        let products = self
            .products
            .find_by_ids(&ids)
            .await
            .map_err(OrderError::Store)?;

        let prices: HashMap<Uuid, f64> =
            products.into_iter().map(|p| (p.id, p.price)).collect();
        if prices.len() != ids.len() {
            return Err(OrderError::ProductsNotFound);
        }

        let mut total = 0.0;
        for item in &draft.items {
            let price = prices
                .get(&item.product_id)
                .ok_or(OrderError::ProductsNotFound)?;
            total += price * f64::from(item.quantity);
        }

        Ok(PricedOrder {
            user_id: draft.user_id,
            items: draft.items,
            total,
        })
    }
}
