//! Users service.
//!
//! Checkout, cart edits, order removal and user deletion run under a shared
//! workflow lock, so two of them cannot interleave within a process. Cart
//! edits made directly through the carts service do not take it, so checkout
//! only removes the snapshots it ordered. Workflows are not atomic across a
//! crash: an order can be persisted without reaching the user's history, or
//! reach it while the cart was never emptied.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    domain::{
        carts::{CartsService, data::NewCart},
        orders::{
            models::{Order, OrderUuid},
            repository::OrdersRepository,
        },
        products::{models::ProductUuid, repository::ProductsRepository},
        users::{
            data::NewUser,
            errors::UsersServiceError,
            models::{User, UserUuid},
            repository::UsersRepository,
        },
    },
    storage::Storage,
};

#[derive(Clone)]
pub struct StoreUsersService {
    users_repository: UsersRepository,
    orders_repository: OrdersRepository,
    products_repository: ProductsRepository,
    carts: Arc<dyn CartsService>,
    workflow_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for StoreUsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreUsersService")
            .field("users_repository", &self.users_repository)
            .field("orders_repository", &self.orders_repository)
            .field("products_repository", &self.products_repository)
            .finish_non_exhaustive()
    }
}

impl StoreUsersService {
    #[must_use]
    pub fn new(storage: &Storage, carts: Arc<dyn CartsService>) -> Self {
        Self {
            users_repository: UsersRepository::new(storage.users.clone()),
            orders_repository: OrdersRepository::new(storage.orders.clone()),
            products_repository: ProductsRepository::new(storage.products.clone()),
            carts,
            workflow_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
impl UsersService for StoreUsersService {
    #[tracing::instrument(
        name = "users.service.create_user",
        skip(self, user),
        fields(user_uuid = tracing::field::Empty),
        err
    )]
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        let user = User::new(user.uuid.unwrap_or_default(), user.name);

        tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

        let created = self.users_repository.create_user(user).await?;

        info!(user_uuid = %created.uuid, "created user");

        let cart = self
            .carts
            .create_cart(NewCart {
                user_uuid: Some(created.uuid),
                ..NewCart::default()
            })
            .await?;

        if cart.is_none() {
            warn!(user_uuid = %created.uuid, "user was created without a cart");
        }

        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<User>, UsersServiceError> {
        Ok(self.users_repository.list_users().await?)
    }

    async fn get_user(&self, user: UserUuid) -> Result<Option<User>, UsersServiceError> {
        Ok(self.users_repository.find_user(user).await?)
    }

    async fn list_orders(&self, user: UserUuid) -> Result<Vec<Order>, UsersServiceError> {
        Ok(self.users_repository.list_orders(user).await?)
    }

    #[tracing::instrument(
        name = "users.service.checkout",
        skip(self),
        fields(user_uuid = %user, order_uuid = tracing::field::Empty),
        err
    )]
    async fn checkout(&self, user: UserUuid) -> Result<Option<Order>, UsersServiceError> {
        let _guard = self.workflow_lock.lock().await;

        let Some(cart) = self.carts.get_cart_by_user(user).await? else {
            return Ok(None);
        };

        if cart.is_empty() {
            return Ok(None);
        }

        let cart_uuid = cart.uuid;
        let order = Order::new(OrderUuid::new(), user, cart.products);

        tracing::Span::current().record("order_uuid", tracing::field::display(order.uuid));

        let order = self.orders_repository.create_order(order).await?;

        if !self
            .users_repository
            .add_order(user, order.clone())
            .await?
        {
            warn!(user_uuid = %user, "checked out a cart whose user does not exist");
        }

        self.carts
            .remove_snapshots(cart_uuid, order.products.clone())
            .await?;

        info!(
            user_uuid = %user,
            order_uuid = %order.uuid,
            total_price = order.total_price,
            "checked out cart"
        );

        Ok(Some(order))
    }

    #[tracing::instrument(
        name = "users.service.empty_cart",
        skip(self),
        fields(user_uuid = %user),
        err
    )]
    async fn empty_cart(&self, user: UserUuid) -> Result<(), UsersServiceError> {
        let _guard = self.workflow_lock.lock().await;

        let Some(cart) = self.carts.get_cart_by_user(user).await? else {
            return Ok(());
        };

        self.carts.remove_snapshots(cart.uuid, cart.products).await?;

        info!(user_uuid = %user, "emptied cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "users.service.remove_order",
        skip(self),
        fields(user_uuid = %user, order_uuid = %order),
        err
    )]
    async fn remove_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<(), UsersServiceError> {
        let _guard = self.workflow_lock.lock().await;

        self.users_repository.remove_order(user, order).await?;

        if !self.orders_repository.delete_order(order).await? {
            return Err(UsersServiceError::OrderNotFound(order));
        }

        info!(user_uuid = %user, order_uuid = %order, "removed order");

        Ok(())
    }

    #[tracing::instrument(
        name = "users.service.add_product_to_cart",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn add_product_to_cart(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), UsersServiceError> {
        let _guard = self.workflow_lock.lock().await;

        let snapshot = self
            .products_repository
            .find_product(product)
            .await?
            .ok_or(UsersServiceError::ProductNotFound(product))?;

        let cart = self
            .carts
            .get_cart_by_user(user)
            .await?
            .ok_or(UsersServiceError::CartNotFound(user))?;

        self.carts.add_product(cart.uuid, snapshot).await?;

        info!(user_uuid = %user, product_uuid = %product, "added product to cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "users.service.remove_product_from_cart",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn remove_product_from_cart(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), UsersServiceError> {
        let _guard = self.workflow_lock.lock().await;

        if self
            .products_repository
            .find_product(product)
            .await?
            .is_none()
        {
            return Err(UsersServiceError::ProductNotFound(product));
        }

        let cart = self
            .carts
            .get_cart_by_user(user)
            .await?
            .ok_or(UsersServiceError::CartNotFound(user))?;

        self.carts.remove_product(cart.uuid, product).await?;

        info!(user_uuid = %user, product_uuid = %product, "removed product from cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "users.service.delete_user",
        skip(self),
        fields(user_uuid = %user),
        err
    )]
    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError> {
        let _guard = self.workflow_lock.lock().await;

        if self.users_repository.find_user(user).await?.is_none() {
            return Err(UsersServiceError::UserNotFound(user));
        }

        if let Some(cart) = self.carts.get_cart_by_user(user).await? {
            self.carts.delete_cart(cart.uuid).await?;
        }

        self.users_repository.delete_user(user).await?;

        info!(user_uuid = %user, "deleted user");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Creates a user along with their empty cart.
    ///
    /// If the cart cannot be created the user is kept and a warning is logged.
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Retrieves all users.
    async fn list_users(&self) -> Result<Vec<User>, UsersServiceError>;

    /// Retrieve a single user, `None` when it does not exist.
    async fn get_user(&self, user: UserUuid) -> Result<Option<User>, UsersServiceError>;

    /// The user's order history. Empty for unknown users.
    async fn list_orders(&self, user: UserUuid) -> Result<Vec<Order>, UsersServiceError>;

    /// Turns the user's cart into an order and removes the ordered products
    /// from the cart. Products added to the cart while checking out stay.
    ///
    /// Returns `None` without touching anything when the cart is missing or
    /// empty.
    async fn checkout(&self, user: UserUuid) -> Result<Option<Order>, UsersServiceError>;

    /// Removes every product from the user's cart. A missing cart is ignored.
    async fn empty_cart(&self, user: UserUuid) -> Result<(), UsersServiceError>;

    /// Removes an order from the user's history, then deletes the order.
    ///
    /// An unknown order is reported as [`UsersServiceError::OrderNotFound`]
    /// after the history has already been updated.
    async fn remove_order(&self, user: UserUuid, order: OrderUuid)
    -> Result<(), UsersServiceError>;

    /// Adds a snapshot of a catalog product to the user's cart.
    async fn add_product_to_cart(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), UsersServiceError>;

    /// Removes a catalog product from the user's cart.
    async fn remove_product_from_cart(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), UsersServiceError>;

    /// Deletes the user and their cart. Their orders are kept.
    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError>;
}
