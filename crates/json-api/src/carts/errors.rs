//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::Storage(source) => {
            error!("carts storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
