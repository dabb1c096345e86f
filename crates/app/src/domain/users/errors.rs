//! Users service errors.

use thiserror::Error;

use crate::{
    domain::{
        carts::CartsServiceError, orders::models::OrderUuid, products::models::ProductUuid,
        users::models::UserUuid,
    },
    store::StoreError,
};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user {0} not found")]
    UserNotFound(UserUuid),

    #[error("order {0} not found")]
    OrderNotFound(OrderUuid),

    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    #[error("cart for user {0} not found")]
    CartNotFound(UserUuid),

    #[error(transparent)]
    Carts(#[from] CartsServiceError),

    #[error("storage error")]
    Storage(#[from] StoreError),
}
