//! Apply Discount Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, products::errors::into_status_error};

/// Apply Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountRequest {
    /// Percentage taken off each price. Not range checked.
    pub percent: f64,

    /// Products to discount
    pub products: Vec<Uuid>,
}

/// Apply Discount Handler
///
/// Reduces the price of every listed product. Unknown products are skipped.
#[endpoint(
    tags("products"),
    summary = "Apply Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount applied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DiscountRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    state
        .app
        .products
        .apply_discount(
            request.percent,
            request.products.into_iter().map(Into::into).collect(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
