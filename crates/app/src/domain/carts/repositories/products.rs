//! Cart Products Repository
//!
//! Edits the product list nested inside a cart. Each edit rewrites the whole
//! carts collection.

use crate::{
    domain::{
        carts::models::{Cart, CartUuid},
        products::models::{Product, ProductUuid},
    },
    store::{Collection, StoreError},
};

#[derive(Debug, Clone)]
pub(crate) struct CartProductsRepository {
    carts: Collection<Cart>,
}

impl CartProductsRepository {
    #[must_use]
    pub(crate) fn new(carts: Collection<Cart>) -> Self {
        Self { carts }
    }

    /// Returns `false` when the cart does not exist.
    pub(crate) async fn add_product(
        &self,
        cart: CartUuid,
        product: Product,
    ) -> Result<bool, StoreError> {
        let added = self
            .carts
            .mutate(move |carts| {
                let existing = carts.iter_mut().find(|c| c.uuid == cart)?;

                existing.products.push(product);

                Some(())
            })
            .await?;

        Ok(added.is_some())
    }

    /// Removes every snapshot of `product` from the cart. Returns `false` when
    /// the cart does not exist.
    pub(crate) async fn remove_product(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<bool, StoreError> {
        let removed = self
            .carts
            .mutate(|carts| {
                let existing = carts.iter_mut().find(|c| c.uuid == cart)?;

                existing.products.retain(|p| p.uuid != product);

                Some(())
            })
            .await?;

        Ok(removed.is_some())
    }

    /// Removes one occurrence of each given snapshot, leaving anything added
    /// since they were read. Returns `false` when the cart does not exist.
    pub(crate) async fn remove_snapshots(
        &self,
        cart: CartUuid,
        snapshots: Vec<Product>,
    ) -> Result<bool, StoreError> {
        let removed = self
            .carts
            .mutate(move |carts| {
                let existing = carts.iter_mut().find(|c| c.uuid == cart)?;

                for snapshot in &snapshots {
                    if let Some(position) = existing.products.iter().position(|p| p == snapshot) {
                        existing.products.remove(position);
                    }
                }

                Some(())
            })
            .await?;

        Ok(removed.is_some())
    }
}
