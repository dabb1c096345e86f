//! Cart Models

use serde::{Deserialize, Serialize};

use crate::{
    domain::{products::models::Product, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(rename = "id")]
    pub uuid: CartUuid,
    #[serde(rename = "userId")]
    pub user_uuid: UserUuid,
    /// Snapshot copies taken when each product was added.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Cart {
    /// An empty cart owned by `user`.
    #[must_use]
    pub fn empty(uuid: CartUuid, user: UserUuid) -> Self {
        Self {
            uuid,
            user_uuid: user,
            products: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
