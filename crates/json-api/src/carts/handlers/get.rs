//! Get Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartPayload},
    extensions::*,
};

/// Get Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartPayload>, StatusError> {
    let state = depot.state_or_500()?;
    let uuid = cart.into_inner();

    let cart = state
        .app
        .carts
        .get_cart(uuid.into())
        .await
        .map_err(into_status_error)?
        .or_404(format!("cart {uuid} not found"))?;

    Ok(Json(cart.into()))
}
