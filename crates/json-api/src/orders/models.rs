//! Order Payloads

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::Order;

use crate::products::models::ProductPayload;

/// An order with the product snapshots it was created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderPayload {
    pub id: Uuid,
    pub user_id: Uuid,
    pub products: Vec<ProductPayload>,

    /// Sum of the product prices when the order was created
    pub total_price: f64,
}

impl From<Order> for OrderPayload {
    fn from(order: Order) -> Self {
        Self {
            id: order.uuid.into(),
            user_id: order.user_uuid.into(),
            products: order.products.into_iter().map(Into::into).collect(),
            total_price: order.total_price,
        }
    }
}
