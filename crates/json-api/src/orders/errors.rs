//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound(_) => StatusError::not_found().brief(error.to_string()),
        OrdersServiceError::Storage(source) => {
            error!("orders storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
