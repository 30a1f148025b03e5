//! # ActorClient Trait
//!
//! Shared read/delete operations for resource-specific client wrappers.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the generic operations.
///
/// A wrapper implements `inner` and `map_error`; `get`, `list` and `delete` come for free.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Warehouse { id: u32 }
/// #[derive(Debug)] struct WarehouseCreate;
/// #[derive(Debug)] struct WarehouseUpdate;
/// #[derive(Debug)] enum WarehouseAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct WarehouseError(String);
///
/// impl From<String> for WarehouseError {
///     fn from(s: String) -> Self { WarehouseError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Warehouse {
///     type Id = u32;
///     type Create = WarehouseCreate;
///     type Update = WarehouseUpdate;
///     type Action = WarehouseAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = WarehouseError;
///
///     fn from_create_params(id: u32, _: WarehouseCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: WarehouseUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: WarehouseAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct WarehouseClient {
///     inner: ResourceClient<Warehouse>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Warehouse> for WarehouseClient {
///     type Error = WarehouseError;
///
///     fn inner(&self) -> &ResourceClient<Warehouse> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         WarehouseError(e.to_string())
///     }
/// }
///
/// async fn usage(client: WarehouseClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, ordered by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
