//! Orders Repository

use crate::{
    domain::orders::models::{Order, OrderUuid},
    store::{Collection, StoreError},
};

#[derive(Debug, Clone)]
pub(crate) struct OrdersRepository {
    orders: Collection<Order>,
}

impl OrdersRepository {
    #[must_use]
    pub(crate) fn new(orders: Collection<Order>) -> Self {
        Self { orders }
    }

    pub(crate) async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.orders.read_all().await
    }

    pub(crate) async fn find_order(&self, order: OrderUuid) -> Result<Option<Order>, StoreError> {
        self.orders.find(|o| o.uuid == order).await
    }

    pub(crate) async fn create_order(&self, order: Order) -> Result<Order, StoreError> {
        self.orders.append(order.clone()).await?;

        Ok(order)
    }

    pub(crate) async fn delete_order(&self, order: OrderUuid) -> Result<bool, StoreError> {
        let removed = self
            .orders
            .mutate(|orders| {
                let before = orders.len();

                orders.retain(|o| o.uuid != order);

                (orders.len() != before).then_some(())
            })
            .await?;

        Ok(removed.is_some())
    }
}
