//! List User Orders Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, orders::models::OrderPayload, users::errors::into_status_error};

/// List User Orders Handler
///
/// Returns the user's order history. Unknown users have no orders.
#[endpoint(
    tags("users"),
    summary = "List User Orders",
    responses(
        (status_code = StatusCode::OK, description = "Orders"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderPayload>>, StatusError> {
    let state = depot.state_or_500()?;

    let orders = state
        .app
        .users
        .list_orders(user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
