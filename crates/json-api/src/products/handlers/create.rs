//! Create Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductPayload},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Optional product UUID; generated when omitted
    pub id: Option<Uuid>,
    pub name: String,
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: request.id.map(Into::into),
            name: request.name,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductPayload>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, models::Product};

    use crate::test_helpers::{products_service, storage_error};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| {
                new.uuid.is_none() && new.name == "Pen" && (new.price - 1.5).abs() < f64::EPSILON
            })
            .returning(|new| {
                Ok(Product {
                    uuid: new.uuid.unwrap_or_default(),
                    name: new.name,
                    price: new.price,
                })
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Pen", "price": 1.5 }))
            .send(&make_service(products))
            .await;

        let body: ProductPayload = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/products/{}", body.id).as_str()));
        assert_eq!(body.name, "Pen");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_keeps_given_id() -> TestResult {
        let id = Uuid::now_v7();

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |new| new.uuid == Some(id.into()))
            .returning(|new| {
                Ok(Product {
                    uuid: new.uuid.unwrap_or_default(),
                    name: new.name,
                    price: new.price,
                })
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "id": id, "name": "Ink", "price": 3.0 }))
            .send(&make_service(products))
            .await;

        let body: ProductPayload = res.take_json().await?;

        assert_eq!(body.id, id);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_price_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Pen" }))
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .returning(|_| Err(storage_error().into()));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Pen", "price": 1.5 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
