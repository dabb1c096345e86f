//! App Context

use std::sync::Arc;

use crate::{
    domain::{
        carts::{CartsService, StoreCartsService},
        orders::{OrdersService, StoreOrdersService},
        products::{ProductsService, StoreProductsService},
        users::{StoreUsersService, UsersService},
    },
    storage::{Storage, StoragePaths},
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build application context over the given storage.
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let carts: Arc<dyn CartsService> = Arc::new(StoreCartsService::new(storage));

        Self {
            products: Arc::new(StoreProductsService::new(storage)),
            orders: Arc::new(StoreOrdersService::new(storage)),
            users: Arc::new(StoreUsersService::new(storage, Arc::clone(&carts))),
            carts,
        }
    }

    /// Build application context over JSON collection files.
    #[must_use]
    pub fn from_paths(paths: &StoragePaths) -> Self {
        Self::from_storage(&Storage::json_files(paths))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
