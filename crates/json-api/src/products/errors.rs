//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Storage(source) => {
            error!("products storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
