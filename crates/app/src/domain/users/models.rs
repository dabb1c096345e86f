//! User Models

use serde::{Deserialize, Serialize};

use crate::{domain::orders::models::Order, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// User Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "id")]
    pub uuid: UserUuid,
    pub name: String,
    /// Copies of the orders this user checked out.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl User {
    #[must_use]
    pub fn new(uuid: UserUuid, name: String) -> Self {
        Self {
            uuid,
            name,
            orders: Vec::new(),
        }
    }
}
