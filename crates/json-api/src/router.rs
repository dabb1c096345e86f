//! App Router

use salvo::Router;

use crate::{carts, orders, products, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(users_router())
        .push(products_router())
        .push(carts_router())
        .push(orders_router())
}

fn users_router() -> Router {
    Router::with_path("users")
        .get(users::index::handler)
        .post(users::create::handler)
        .push(
            Router::with_path("{user}")
                .get(users::get::handler)
                .delete(users::delete::handler)
                .push(Router::with_path("checkout").post(users::checkout::handler))
                .push(
                    Router::with_path("orders")
                        .get(users::orders::handler)
                        .push(Router::with_path("{order}").delete(users::remove_order::handler)),
                )
                .push(
                    Router::with_path("cart")
                        .delete(users::empty_cart::handler)
                        .push(
                            Router::with_path("products/{product}")
                                .put(users::add_cart_product::handler)
                                .delete(users::remove_cart_product::handler),
                        ),
                ),
        )
}

fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(Router::with_path("discounts").post(products::discount::handler))
        .push(
            Router::with_path("{product}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

fn carts_router() -> Router {
    Router::with_path("carts")
        .get(carts::index::handler)
        .post(carts::create::handler)
        .push(
            Router::with_path("{cart}")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(
                    Router::with_path("products")
                        .post(carts::products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .delete(carts::products::delete::handler),
                        ),
                ),
        )
}

fn orders_router() -> Router {
    Router::with_path("orders")
        .get(orders::index::handler)
        .post(orders::create::handler)
        .push(
            Router::with_path("{order}")
                .get(orders::get::handler)
                .delete(orders::delete::handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use storefront_app::domain::products::MockProductsService;

    use crate::{
        products::models::ProductPayload,
        test_helpers::{Mocks, make_product, service},
    };

    use super::*;

    #[tokio::test]
    async fn discounts_route_is_not_captured_by_product_uuid() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_apply_discount()
            .once()
            .return_once(|_, _| Ok(()));

        let res = TestClient::post("http://example.com/products/discounts")
            .json(&serde_json::json!({ "percent": 10.0, "products": [] }))
            .send(&service(
                Mocks {
                    products,
                    ..Mocks::default()
                },
                app_router(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn product_routes_resolve_uuid_segment() -> TestResult {
        let product = make_product("Pen", 1.0);
        let uuid = product.uuid;

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |p| *p == uuid)
            .return_once(move |_| Ok(Some(product)));

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&service(
                Mocks {
                    products,
                    ..Mocks::default()
                },
                app_router(),
            ))
            .await;

        let body: ProductPayload = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Pen");

        Ok(())
    }
}
