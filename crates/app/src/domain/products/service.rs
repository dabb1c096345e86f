//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        models::{Product, ProductUuid},
        repository::ProductsRepository,
    },
    storage::Storage,
};

#[derive(Debug, Clone)]
pub struct StoreProductsService {
    repository: ProductsRepository,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        Self {
            repository: ProductsRepository::new(storage.products.clone()),
        }
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.repository.list_products().await?)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<Product>, ProductsServiceError> {
        Ok(self.repository.find_product(product).await?)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_uuid = tracing::field::Empty),
        err
    )]
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let product = Product {
            uuid: product.uuid.unwrap_or_default(),
            name: product.name,
            price: product.price,
        };

        tracing::Span::current().record("product_uuid", tracing::field::display(product.uuid));

        let created = self.repository.create_product(product).await?;

        info!(product_uuid = %created.uuid, price = created.price, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(product_uuid = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ProductsServiceError> {
        let updated = self
            .repository
            .update_product(product, update.name, update.price)
            .await?;

        if let Some(updated) = &updated {
            info!(product_uuid = %updated.uuid, price = updated.price, "updated product");
        }

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.apply_discount",
        skip(self, products),
        fields(product_count = products.len()),
        err
    )]
    async fn apply_discount(
        &self,
        percent: f64,
        products: Vec<ProductUuid>,
    ) -> Result<(), ProductsServiceError> {
        let discounted = self.repository.apply_discount(percent, &products).await?;

        info!(percent, discounted, "applied discount");

        Ok(())
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_uuid = %product),
        err
    )]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        if self.repository.delete_product(product).await? {
            info!(product_uuid = %product, "deleted product");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product, `None` when it does not exist.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<Product>, ProductsServiceError>;

    /// Creates a new product, generating a UUID when none was given.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces a product's name and price. `None` when it does not exist.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ProductsServiceError>;

    /// Reduces the price of every listed product by `percent`.
    ///
    /// The percentage is not validated.
    async fn apply_discount(
        &self,
        percent: f64,
        products: Vec<ProductUuid>,
    ) -> Result<(), ProductsServiceError>;

    /// Deletes a product. Unknown UUIDs are ignored.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
