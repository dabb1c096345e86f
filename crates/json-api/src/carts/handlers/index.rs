//! List Carts Handler

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartPayload},
    extensions::*,
};

/// List Carts Handler
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    responses(
        (status_code = StatusCode::OK, description = "Carts"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartPayload>>, StatusError> {
    let state = depot.state_or_500()?;

    let carts = state
        .app
        .carts
        .list_carts()
        .await
        .map_err(into_status_error)?;

    Ok(Json(carts.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{carts::MockCartsService, users::models::UserUuid};

    use crate::test_helpers::{carts_service, make_cart, make_product};

    use super::*;

    #[tokio::test]
    async fn test_list_carts_returns_200() -> TestResult {
        let cart = make_cart(UserUuid::new(), vec![make_product("Pen", 1.0)]);
        let expected = vec![CartPayload::from(cart.clone())];

        let mut carts = MockCartsService::new();

        carts
            .expect_list_carts()
            .once()
            .return_once(move || Ok(vec![cart]));

        let mut res = TestClient::get("http://example.com/carts")
            .send(&carts_service(carts, Router::with_path("carts").get(handler)))
            .await;

        let body: Vec<CartPayload> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, expected);

        Ok(())
    }
}
