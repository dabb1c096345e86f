//! Get User Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    users::{errors::into_status_error, models::UserPayload},
};

/// Get User Handler
#[endpoint(
    tags("users"),
    summary = "Get User",
    responses(
        (status_code = StatusCode::OK, description = "User"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserPayload>, StatusError> {
    let state = depot.state_or_500()?;
    let uuid = user.into_inner();

    let user = state
        .app
        .users
        .get_user(uuid.into())
        .await
        .map_err(into_status_error)?
        .or_404(format!("user {uuid} not found"))?;

    Ok(Json(user.into()))
}
