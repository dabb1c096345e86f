//! Add Product To Cart Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, products::models::ProductPayload};

/// Add Product To Cart Handler
///
/// Appends the product in the body to the cart as a snapshot. The catalog is
/// not consulted; unknown carts are ignored.
#[endpoint(
    tags("carts"),
    summary = "Add Product to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .carts
        .add_product(cart.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::carts::{MockCartsService, models::CartUuid};

    use crate::test_helpers::{carts_service, make_product};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{cart}/products").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_product_forwards_snapshot() -> TestResult {
        let uuid = CartUuid::new();
        let product = make_product("Pen", 2.5);
        let expected = product.clone();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_product()
            .once()
            .withf(move |cart, snapshot| *cart == uuid && *snapshot == expected)
            .return_once(|_, _| Ok(()));

        let res = TestClient::post(format!("http://example.com/carts/{uuid}/products"))
            .json(&json!({ "id": product.uuid, "name": "Pen", "price": 2.5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_malformed_body_returns_400() -> TestResult {
        let res = TestClient::post(format!("http://example.com/carts/{}/products", Uuid::now_v7()))
            .json(&json!({ "name": "Pen" }))
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
