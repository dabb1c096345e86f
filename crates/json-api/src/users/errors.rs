//! User Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::UserNotFound(_)
        | UsersServiceError::OrderNotFound(_)
        | UsersServiceError::ProductNotFound(_)
        | UsersServiceError::CartNotFound(_) => StatusError::not_found().brief(error.to_string()),
        UsersServiceError::Carts(source) => crate::carts::errors::into_status_error(source),
        UsersServiceError::Storage(source) => {
            error!("users storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
