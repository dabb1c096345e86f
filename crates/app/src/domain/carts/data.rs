//! Cart Data

use crate::domain::{carts::models::CartUuid, products::models::Product, users::models::UserUuid};

/// New Cart Data
///
/// A cart without a `user_uuid` is rejected softly: creation yields no cart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCart {
    /// Generated when omitted.
    pub uuid: Option<CartUuid>,
    pub user_uuid: Option<UserUuid>,
    pub products: Vec<Product>,
}
