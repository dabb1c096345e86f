//! User Payloads

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::users::models::User;

use crate::orders::models::OrderPayload;

/// A user with their order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserPayload {
    pub id: Uuid,
    pub name: String,
    pub orders: Vec<OrderPayload>,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.uuid.into(),
            name: user.name,
            orders: user.orders.into_iter().map(Into::into).collect(),
        }
    }
}
