//! Products Repository

use crate::{
    domain::products::models::{Product, ProductUuid},
    store::{Collection, StoreError},
};

#[derive(Debug, Clone)]
pub(crate) struct ProductsRepository {
    products: Collection<Product>,
}

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new(products: Collection<Product>) -> Self {
        Self { products }
    }

    pub(crate) async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.products.read_all().await
    }

    pub(crate) async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<Product>, StoreError> {
        self.products.find(|p| p.uuid == product).await
    }

    pub(crate) async fn create_product(&self, product: Product) -> Result<Product, StoreError> {
        self.products.append(product.clone()).await?;

        Ok(product)
    }

    pub(crate) async fn update_product(
        &self,
        product: ProductUuid,
        name: String,
        price: f64,
    ) -> Result<Option<Product>, StoreError> {
        self.products
            .mutate(move |products| {
                let existing = products.iter_mut().find(|p| p.uuid == product)?;

                existing.name = name;
                existing.price = price;

                Some(existing.clone())
            })
            .await
    }

    /// Returns how many products were discounted. Storage is only rewritten
    /// when at least one product matched.
    pub(crate) async fn apply_discount(
        &self,
        percent: f64,
        products: &[ProductUuid],
    ) -> Result<usize, StoreError> {
        let discounted = self
            .products
            .mutate(|records| {
                let mut count = 0;

                for record in records.iter_mut().filter(|p| products.contains(&p.uuid)) {
                    record.apply_discount(percent);
                    count += 1;
                }

                (count > 0).then_some(count)
            })
            .await?;

        Ok(discounted.unwrap_or_default())
    }

    pub(crate) async fn delete_product(&self, product: ProductUuid) -> Result<bool, StoreError> {
        let removed = self
            .products
            .mutate(|products| {
                let before = products.len();

                products.retain(|p| p.uuid != product);

                (products.len() != before).then_some(())
            })
            .await?;

        Ok(removed.is_some())
    }
}
