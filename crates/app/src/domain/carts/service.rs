//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::{
        carts::{
            data::NewCart,
            errors::CartsServiceError,
            models::{Cart, CartUuid},
            repositories::{CartProductsRepository, CartsRepository},
        },
        products::models::{Product, ProductUuid},
        users::models::UserUuid,
    },
    storage::Storage,
};

#[derive(Debug, Clone)]
pub struct StoreCartsService {
    carts_repository: CartsRepository,
    products_repository: CartProductsRepository,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        Self {
            carts_repository: CartsRepository::new(storage.carts.clone()),
            products_repository: CartProductsRepository::new(storage.carts.clone()),
        }
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError> {
        Ok(self.carts_repository.list_carts().await?)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<Option<Cart>, CartsServiceError> {
        Ok(self.carts_repository.find_cart(cart).await?)
    }

    async fn get_cart_by_user(&self, user: UserUuid) -> Result<Option<Cart>, CartsServiceError> {
        Ok(self.carts_repository.find_cart_by_user(user).await?)
    }

    #[tracing::instrument(
        name = "carts.service.create_cart",
        skip(self, cart),
        fields(cart_uuid = tracing::field::Empty, user_uuid = tracing::field::Empty),
        err
    )]
    async fn create_cart(&self, cart: NewCart) -> Result<Option<Cart>, CartsServiceError> {
        let Some(user) = cart.user_uuid else {
            warn!("refusing to create a cart without a user");

            return Ok(None);
        };

        let cart = Cart {
            uuid: cart.uuid.unwrap_or_default(),
            user_uuid: user,
            products: cart.products,
        };

        let span = tracing::Span::current();

        span.record("cart_uuid", tracing::field::display(cart.uuid));
        span.record("user_uuid", tracing::field::display(user));

        let created = self.carts_repository.create_cart(cart).await?;

        info!(cart_uuid = %created.uuid, user_uuid = %user, "created cart");

        Ok(Some(created))
    }

    async fn add_product(
        &self,
        cart: CartUuid,
        product: Product,
    ) -> Result<(), CartsServiceError> {
        if self.products_repository.add_product(cart, product).await? {
            info!(cart_uuid = %cart, "added product to cart");
        }

        Ok(())
    }

    async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        if self.products_repository.remove_product(cart, product).await? {
            info!(cart_uuid = %cart, product_uuid = %product, "removed product from cart");
        }

        Ok(())
    }

    async fn remove_snapshots(
        &self,
        cart: CartUuid,
        snapshots: Vec<Product>,
    ) -> Result<(), CartsServiceError> {
        let count = snapshots.len();

        if self
            .products_repository
            .remove_snapshots(cart, snapshots)
            .await?
        {
            info!(cart_uuid = %cart, count, "removed snapshots from cart");
        }

        Ok(())
    }

    async fn save_cart(&self, cart: Cart) -> Result<(), CartsServiceError> {
        Ok(self.carts_repository.save_cart(cart).await?)
    }

    #[tracing::instrument(
        name = "carts.service.delete_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        if self.carts_repository.delete_cart(cart).await? {
            info!(cart_uuid = %cart, "deleted cart");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves all carts.
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart, `None` when it does not exist.
    async fn get_cart(&self, cart: CartUuid) -> Result<Option<Cart>, CartsServiceError>;

    /// The first cart owned by `user`.
    async fn get_cart_by_user(&self, user: UserUuid) -> Result<Option<Cart>, CartsServiceError>;

    /// Creates a cart. Returns `None`, not an error, when no user was given.
    async fn create_cart(&self, cart: NewCart) -> Result<Option<Cart>, CartsServiceError>;

    /// Appends a product snapshot to the cart. Unknown carts are ignored.
    async fn add_product(&self, cart: CartUuid, product: Product)
    -> Result<(), CartsServiceError>;

    /// Removes every snapshot of a product from the cart. Unknown carts are
    /// ignored.
    async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;

    /// Removes one occurrence of each snapshot in a single write. Snapshots
    /// not in the cart and unknown carts are ignored.
    async fn remove_snapshots(
        &self,
        cart: CartUuid,
        snapshots: Vec<Product>,
    ) -> Result<(), CartsServiceError>;

    /// Persists the whole cart, replacing the stored record with the same UUID.
    async fn save_cart(&self, cart: Cart) -> Result<(), CartsServiceError>;

    /// Deletes a cart. Unknown UUIDs are ignored.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;
}
