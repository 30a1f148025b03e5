//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods;
//! `get`, `list` and `delete` come from [`ActorClient`].
use crate::model::{Product, ProductUpsert, RecordId};
use crate::product_actor::{ProductAction, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Restores the entity's own [`ProductError`] where there is one.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => match id.parse() {
                Ok(id) => ProductError::NotFound(RecordId(id)),
                Err(_) => ProductError::ActorCommunicationError(format!("Item not found: {id}")),
            },
            other => other
                .into_entity_error::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ProductClient {
    /// Creates a product and returns the record id it is stored under.
    ///
    /// The generated [`ProductId`](crate::model::ProductId) is on the stored product.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductUpsert) -> Result<RecordId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing product is an error.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: RecordId) -> Result<Product, ProductError> {
        match self.get(id).await? {
            Some(product) => Ok(product),
            None => {
                warn!(%id, "Product not available");
                Err(ProductError::NotFound(id))
            }
        }
    }

    /// Every product, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        if products.is_empty() {
            warn!("No products available");
        }
        Ok(products)
    }

    /// Replaces every editable field of a product and returns the stored result.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: RecordId,
        update: ProductUpsert,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the quantity available.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: RecordId) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::CheckStock).await
    }

    /// Adds `quantity` units and returns the new stock level.
    #[instrument(skip(self))]
    pub async fn add_to_stock(&self, id: RecordId, quantity: u32) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::AddStock(quantity)).await
    }

    /// Removes `quantity` units and returns the remaining stock.
    ///
    /// Fails with [`ProductError::InsufficientStock`] if fewer units are available.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: RecordId, quantity: u32) -> Result<u32, ProductError> {
        self.stock_action(id, ProductAction::DecrementStock(quantity))
            .await
    }

    async fn stock_action(&self, id: RecordId, action: ProductAction) -> Result<u32, ProductError> {
        debug!(%id, ?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
