//! List Users Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    users::{errors::into_status_error, models::UserPayload},
};

/// List Users Handler
#[endpoint(
    tags("users"),
    summary = "List Users",
    responses(
        (status_code = StatusCode::OK, description = "Users"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserPayload>>, StatusError> {
    let state = depot.state_or_500()?;

    let users = state
        .app
        .users
        .list_users()
        .await
        .map_err(into_status_error)?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
