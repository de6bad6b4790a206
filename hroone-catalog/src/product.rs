use hroone_core::normalize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product as the store holds it.
///
/// Identifiers are store-assigned; name, description and size are kept in
/// their folded lowercase form. Products are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub size: Option<String>,
}

/// Input for creating a product, before validation and folding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub size: Option<String>,
}

/// Product-related errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price must be greater than zero")]
    NonPositivePrice,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(ProductError::NonPositivePrice);
        }
        Ok(())
    }

    /// Fold all text fields to their stored lowercase form.
    pub fn normalized(self) -> Self {
        Self {
            name: normalize::fold(&self.name),
            description: normalize::fold_opt(self.description),
            price: self.price,
            size: normalize::fold_opt(self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> NewProduct {
        NewProduct {
            name: "Red Shirt".to_string(),
            description: Some("Bright RED".to_string()),
            price: 19.99,
            size: Some("XL".to_string()),
        }
    }

    #[test]
    fn accepts_valid_product() {
        assert!(shirt().validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut product = shirt();
        product.name = "   ".to_string();
        assert!(matches!(product.validate(), Err(ProductError::EmptyName)));
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut product = shirt();
        product.price = 0.0;
        assert!(matches!(product.validate(), Err(ProductError::NonPositivePrice)));

        product.price = -4.5;
        assert!(matches!(product.validate(), Err(ProductError::NonPositivePrice)));

        product.price = f64::NAN;
        assert!(matches!(product.validate(), Err(ProductError::NonPositivePrice)));
    }

    #[test]
    fn folds_all_text_fields() {
        let product = shirt().normalized();
        assert_eq!(product.name, "red shirt");
        assert_eq!(product.description.as_deref(), Some("bright red"));
        assert_eq!(product.size.as_deref(), Some("xl"));
        assert_eq!(product.price, 19.99);
    }
}
