//! Checkout Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, orders::models::OrderPayload, users::errors::into_status_error};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The created order; `null` when the cart was missing or empty
    pub order: Option<OrderPayload>,
}

/// Checkout Handler
///
/// Turns the user's cart into an order and empties the cart.
#[endpoint(
    tags("users"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Checkout finished"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let order = state
        .app
        .users
        .checkout(user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckoutResponse {
        order: order.map(Into::into),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::users::{MockUsersService, models::UserUuid};

    use crate::test_helpers::{make_order, make_product, users_service};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(
            users,
            Router::with_path("users/{user}/checkout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_checkout_returns_order() -> TestResult {
        let user = UserUuid::new();
        let order = make_order(
            user,
            vec![make_product("A", 10.0), make_product("B", 15.0)],
        );

        let mut users = MockUsersService::new();

        users
            .expect_checkout()
            .once()
            .withf(move |u| *u == user)
            .return_once(move |_| Ok(Some(order)));

        let mut res = TestClient::post(format!("http://example.com/users/{user}/checkout"))
            .send(&make_service(users))
            .await;

        let body: CheckoutResponse = res.take_json().await?;
        let order = body.order.ok_or("expected an order")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!((order.total_price - 25.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_no_order() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_checkout().once().return_once(|_| Ok(None));

        let mut res = TestClient::post(format!(
            "http://example.com/users/{}/checkout",
            Uuid::now_v7()
        ))
        .send(&make_service(users))
        .await;

        let body: CheckoutResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.order.is_none());

        Ok(())
    }
}
