//! Carts Repository

use crate::{
    domain::{
        carts::models::{Cart, CartUuid},
        users::models::UserUuid,
    },
    store::{Collection, StoreError},
};

#[derive(Debug, Clone)]
pub(crate) struct CartsRepository {
    carts: Collection<Cart>,
}

impl CartsRepository {
    #[must_use]
    pub(crate) fn new(carts: Collection<Cart>) -> Self {
        Self { carts }
    }

    pub(crate) async fn list_carts(&self) -> Result<Vec<Cart>, StoreError> {
        self.carts.read_all().await
    }

    pub(crate) async fn find_cart(&self, cart: CartUuid) -> Result<Option<Cart>, StoreError> {
        self.carts.find(|c| c.uuid == cart).await
    }

    pub(crate) async fn find_cart_by_user(
        &self,
        user: UserUuid,
    ) -> Result<Option<Cart>, StoreError> {
        self.carts.find(|c| c.user_uuid == user).await
    }

    pub(crate) async fn create_cart(&self, cart: Cart) -> Result<Cart, StoreError> {
        self.carts.append(cart.clone()).await?;

        Ok(cart)
    }

    /// Replace the stored cart with the same UUID, appending it when absent.
    pub(crate) async fn save_cart(&self, cart: Cart) -> Result<(), StoreError> {
        self.carts
            .mutate(move |carts| {
                match carts.iter_mut().find(|c| c.uuid == cart.uuid) {
                    Some(existing) => *existing = cart,
                    None => carts.push(cart),
                }

                Some(())
            })
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_cart(&self, cart: CartUuid) -> Result<bool, StoreError> {
        let removed = self
            .carts
            .mutate(|carts| {
                let before = carts.len();

                carts.retain(|c| c.uuid != cart);

                (carts.len() != before).then_some(())
            })
            .await?;

        Ok(removed.is_some())
    }
}
