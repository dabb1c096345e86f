//! Product Models

use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
///
/// Carts and orders embed owned copies of this record, so later catalog edits
/// never reach products that were already added or checked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "id")]
    pub uuid: ProductUuid,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Scale the price by `1 - percent / 100`.
    ///
    /// The percentage is applied as given: above 100 the price goes negative,
    /// below 0 it increases.
    pub fn apply_discount(&mut self, percent: f64) {
        self.price *= 1.0 - percent / 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64) -> Product {
        Product {
            uuid: ProductUuid::new(),
            name: "Widget".to_string(),
            price,
        }
    }

    #[test]
    fn sixty_percent_off_one_hundred_is_forty() {
        let mut widget = product(100.0);

        widget.apply_discount(60.0);

        assert!((widget.price - 40.0).abs() < 1e-9, "got {}", widget.price);
    }

    #[test]
    fn discount_over_one_hundred_percent_goes_negative() {
        let mut widget = product(100.0);

        widget.apply_discount(150.0);

        assert!((widget.price + 50.0).abs() < 1e-9, "got {}", widget.price);
    }

    #[test]
    fn negative_discount_raises_price() {
        let mut widget = product(100.0);

        widget.apply_discount(-10.0);

        assert!((widget.price - 110.0).abs() < 1e-9, "got {}", widget.price);
    }

    #[test]
    fn serializes_with_id_key() -> testresult::TestResult {
        let widget = product(2.5);
        let json = serde_json::to_value(&widget)?;

        assert_eq!(json["id"], serde_json::json!(widget.uuid.into_uuid()));
        assert_eq!(json["price"], serde_json::json!(2.5));

        Ok(())
    }
}
