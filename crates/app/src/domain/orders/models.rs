//! Order Models

use serde::{Deserialize, Serialize};

use crate::{
    domain::{products::models::Product, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// Immutable once created. `total_price` is fixed at creation and does not
/// follow later catalog price changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "id")]
    pub uuid: OrderUuid,
    #[serde(rename = "userId")]
    pub user_uuid: UserUuid,
    #[serde(default)]
    pub products: Vec<Product>,
    pub total_price: f64,
}

impl Order {
    /// Build an order from product snapshots, totalling their prices.
    #[must_use]
    pub fn new(uuid: OrderUuid, user: UserUuid, products: Vec<Product>) -> Self {
        let total_price = products.iter().map(|p| p.price).sum();

        Self {
            uuid,
            user_uuid: user,
            products,
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::products::models::ProductUuid;

    use super::*;

    fn product(price: f64) -> Product {
        Product {
            uuid: ProductUuid::new(),
            name: "Widget".to_string(),
            price,
        }
    }

    #[test]
    fn total_is_sum_of_product_prices() {
        let order = Order::new(
            OrderUuid::new(),
            UserUuid::new(),
            vec![product(10.0), product(15.0)],
        );

        assert!((order.total_price - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn order_without_products_totals_zero() {
        let order = Order::new(OrderUuid::new(), UserUuid::new(), Vec::new());

        assert!(order.total_price.abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_with_camel_case_keys() -> TestResult {
        let order = Order::new(OrderUuid::new(), UserUuid::new(), vec![product(2.0)]);
        let json = serde_json::to_value(&order)?;

        assert_eq!(json["id"], serde_json::json!(order.uuid.into_uuid()));
        assert_eq!(json["userId"], serde_json::json!(order.user_uuid.into_uuid()));
        assert_eq!(json["totalPrice"], serde_json::json!(2.0));

        Ok(())
    }
}
