//! Cart Payloads

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::models::Cart;

use crate::products::models::ProductPayload;

/// A cart and the product snapshots it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartPayload {
    pub id: Uuid,
    pub user_id: Uuid,
    pub products: Vec<ProductPayload>,
}

impl From<Cart> for CartPayload {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.uuid.into(),
            user_id: cart.user_uuid.into(),
            products: cart.products.into_iter().map(Into::into).collect(),
        }
    }
}
