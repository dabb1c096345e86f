//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::orders::{
        data::NewOrder,
        errors::OrdersServiceError,
        models::{Order, OrderUuid},
        repository::OrdersRepository,
    },
    storage::Storage,
};

#[derive(Debug, Clone)]
pub struct StoreOrdersService {
    repository: OrdersRepository,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        Self {
            repository: OrdersRepository::new(storage.orders.clone()),
        }
    }
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.repository.list_orders().await?)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Option<Order>, OrdersServiceError> {
        Ok(self.repository.find_order(order).await?)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(order_uuid = tracing::field::Empty, user_uuid = %order.user_uuid),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let order = Order::new(
            order.uuid.unwrap_or_default(),
            order.user_uuid,
            order.products,
        );

        tracing::Span::current().record("order_uuid", tracing::field::display(order.uuid));

        let created = self.repository.create_order(order).await?;

        info!(
            order_uuid = %created.uuid,
            total_price = created.total_price,
            "created order"
        );

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.delete_order",
        skip(self),
        fields(order_uuid = %order),
        err
    )]
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        if !self.repository.delete_order(order).await? {
            return Err(OrdersServiceError::NotFound(order));
        }

        info!(order_uuid = %order, "deleted order");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order, `None` when it does not exist.
    async fn get_order(&self, order: OrderUuid) -> Result<Option<Order>, OrdersServiceError>;

    /// Creates an order, totalling the prices of its products.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Deletes an order.
    ///
    /// Unlike the other entities, deleting an unknown order is an error.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            products::models::{Product, ProductUuid},
            users::models::UserUuid,
        },
        test::TestContext,
    };

    use super::*;

    fn new_order(prices: &[f64]) -> NewOrder {
        NewOrder {
            uuid: None,
            user_uuid: UserUuid::new(),
            products: prices
                .iter()
                .map(|&price| Product {
                    uuid: ProductUuid::new(),
                    name: "Widget".to_string(),
                    price,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn create_order_computes_total() -> TestResult {
        let ctx = TestContext::new();

        let order = ctx.orders.create_order(new_order(&[10.0, 15.0])).await?;

        assert!((order.total_price - 25.0).abs() < f64::EPSILON);
        assert_eq!(ctx.orders.get_order(order.uuid).await?, Some(order));

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_returns_created_orders() -> TestResult {
        let ctx = TestContext::new();

        let first = ctx.orders.create_order(new_order(&[1.0])).await?;
        let second = ctx.orders.create_order(new_order(&[2.0])).await?;

        assert_eq!(ctx.orders.list_orders().await?, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn delete_order_removes_it() -> TestResult {
        let ctx = TestContext::new();

        let order = ctx.orders.create_order(new_order(&[1.0])).await?;

        ctx.orders.delete_order(order.uuid).await?;

        assert!(ctx.orders.get_order(order.uuid).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_order_is_not_found() -> TestResult {
        let ctx = TestContext::new();

        let order = ctx.orders.create_order(new_order(&[1.0])).await?;
        let missing = OrderUuid::new();

        let result = ctx.orders.delete_order(missing).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound(uuid)) if uuid == missing),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(ctx.orders.list_orders().await?, vec![order]);

        Ok(())
    }
}
