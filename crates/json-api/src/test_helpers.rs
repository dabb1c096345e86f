//! Test helpers.

use std::{io, path::PathBuf, sync::Arc};

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartUuid},
        },
        orders::{
            MockOrdersService,
            models::{Order, OrderUuid},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        users::{
            MockUsersService,
            models::{User, UserUuid},
        },
    },
    store::StoreError,
};

use crate::state::State;

/// Mocked services. Any service left at its default panics on first use.
#[derive(Default)]
pub(crate) struct Mocks {
    pub products: MockProductsService,
    pub carts: MockCartsService,
    pub orders: MockOrdersService,
    pub users: MockUsersService,
}

impl Mocks {
    fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            users: Arc::new(self.users),
        })
    }
}

pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        Mocks {
            products,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        Mocks {
            carts,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(
        Mocks {
            orders,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    service(
        Mocks {
            users,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn storage_error() -> StoreError {
    StoreError::Read {
        path: PathBuf::from("/data/test.json"),
        source: io::Error::other("disk unavailable"),
    }
}

pub(crate) fn make_product(name: &str, price: f64) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        price,
    }
}

pub(crate) fn make_cart(user: UserUuid, products: Vec<Product>) -> Cart {
    Cart {
        uuid: CartUuid::new(),
        user_uuid: user,
        products,
    }
}

pub(crate) fn make_order(user: UserUuid, products: Vec<Product>) -> Order {
    Order::new(OrderUuid::new(), user, products)
}

pub(crate) fn make_user(name: &str) -> User {
    User::new(UserUuid::new(), name.to_string())
}
