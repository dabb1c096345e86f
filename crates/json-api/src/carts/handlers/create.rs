//! Create Cart Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::data::NewCart;

use crate::{
    carts::{errors::into_status_error, models::CartPayload},
    extensions::*,
    products::models::ProductPayload,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCartRequest {
    /// Optional cart UUID; generated when omitted
    pub id: Option<Uuid>,

    /// Owner of the cart. Required.
    pub user_id: Option<Uuid>,

    #[serde(default)]
    pub products: Vec<ProductPayload>,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            uuid: request.id.map(Into::into),
            user_uuid: request.user_id.map(Into::into),
            products: request.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing user or malformed body"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartPayload>, StatusError> {
    let state = depot.state_or_500()?;

    let cart = state
        .app
        .carts
        .create_cart(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::bad_request().brief("A cart needs a userId"))?;

    res.add_header(LOCATION, format!("/carts/{}", cart.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
