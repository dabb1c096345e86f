//! Order Data

use crate::domain::{
    orders::models::OrderUuid, products::models::Product, users::models::UserUuid,
};

/// New Order Data
///
/// The total is always computed from `products`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Generated when omitted.
    pub uuid: Option<OrderUuid>,
    pub user_uuid: UserUuid,
    pub products: Vec<Product>,
}
