//! Storage wiring
//!
//! One collection per entity. Services are built from a [`Storage`] and share
//! its collection handles, so all writers of a collection go through the same
//! write lock.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    domain::{
        carts::models::Cart, orders::models::Order, products::models::Product,
        users::models::User,
    },
    store::{Collection, InMemoryStore, JsonFileStore},
};

pub const PRODUCTS_COLLECTION: &str = "products";
pub const CARTS_COLLECTION: &str = "carts";
pub const ORDERS_COLLECTION: &str = "orders";
pub const USERS_COLLECTION: &str = "users";

/// Locations of the four collection files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub products: PathBuf,
    pub carts: PathBuf,
    pub orders: PathBuf,
    pub users: PathBuf,
}

impl StoragePaths {
    /// `<dir>/products.json`, `<dir>/carts.json`, and so on.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            products: dir.join(format!("{PRODUCTS_COLLECTION}.json")),
            carts: dir.join(format!("{CARTS_COLLECTION}.json")),
            orders: dir.join(format!("{ORDERS_COLLECTION}.json")),
            users: dir.join(format!("{USERS_COLLECTION}.json")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) products: Collection<Product>,
    pub(crate) carts: Collection<Cart>,
    pub(crate) orders: Collection<Order>,
    pub(crate) users: Collection<User>,
}

impl Storage {
    /// JSON files at the given paths.
    #[must_use]
    pub fn json_files(paths: &StoragePaths) -> Self {
        Self {
            products: Collection::new(
                PRODUCTS_COLLECTION,
                Arc::new(JsonFileStore::<Product>::new(&paths.products)),
            ),
            carts: Collection::new(
                CARTS_COLLECTION,
                Arc::new(JsonFileStore::<Cart>::new(&paths.carts)),
            ),
            orders: Collection::new(
                ORDERS_COLLECTION,
                Arc::new(JsonFileStore::<Order>::new(&paths.orders)),
            ),
            users: Collection::new(
                USERS_COLLECTION,
                Arc::new(JsonFileStore::<User>::new(&paths.users)),
            ),
        }
    }

    /// Empty, process-local collections.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            products: Collection::new(
                PRODUCTS_COLLECTION,
                Arc::new(InMemoryStore::<Product>::new()),
            ),
            carts: Collection::new(CARTS_COLLECTION, Arc::new(InMemoryStore::<Cart>::new())),
            orders: Collection::new(ORDERS_COLLECTION, Arc::new(InMemoryStore::<Order>::new())),
            users: Collection::new(USERS_COLLECTION, Arc::new(InMemoryStore::<User>::new())),
        }
    }
}
