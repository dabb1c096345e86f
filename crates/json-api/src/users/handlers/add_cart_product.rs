//! Add Catalog Product To User Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, users::errors::into_status_error};

/// Add Catalog Product To User Cart Handler
///
/// Copies the current catalog product into the user's cart.
#[endpoint(
    tags("users"),
    summary = "Add Product to User Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product or cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .users
        .add_product_to_cart(user.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use storefront_app::domain::{
        products::models::ProductUuid,
        users::{MockUsersService, UsersServiceError, models::UserUuid},
    };

    use crate::test_helpers::users_service;

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(
            users,
            Router::with_path("users/{user}/cart/products/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_add_product_success() -> TestResult {
        let user = UserUuid::new();
        let product = ProductUuid::new();

        let mut users = MockUsersService::new();

        users
            .expect_add_product_to_cart()
            .once()
            .withf(move |u, p| *u == user && *p == product)
            .return_once(|_, _| Ok(()));

        let res = TestClient::put(format!(
            "http://example.com/users/{user}/cart/products/{product}"
        ))
        .send(&make_service(users))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let user = UserUuid::new();
        let product = ProductUuid::new();

        let mut users = MockUsersService::new();

        users
            .expect_add_product_to_cart()
            .once()
            .return_once(move |_, _| Err(UsersServiceError::ProductNotFound(product)));

        let res = TestClient::put(format!(
            "http://example.com/users/{user}/cart/products/{product}"
        ))
        .send(&make_service(users))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
