//! Orders service errors.

use thiserror::Error;

use crate::{domain::orders::models::OrderUuid, store::StoreError};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order {0} not found")]
    NotFound(OrderUuid),

    #[error("storage error")]
    Storage(#[from] StoreError),
}
