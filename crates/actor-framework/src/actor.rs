//! # Generic Actor Server
//!
//! `ResourceActor` owns the entity store and the id counter for one resource type and
//! processes requests sequentially, so neither needs a lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half: it owns the store and the receiving end of the channel.
/// Every message is handled to completion before the next one is read, which gives
/// exclusive access to the store without `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Sku { id: u32, code: String }
/// #[derive(Debug)] struct SkuCreate;
/// #[derive(Debug)] struct SkuUpdate;
/// #[derive(Debug)] enum SkuAction {}
/// #[derive(Debug, thiserror::Error)] #[error("sku error")] struct SkuError;
///
/// #[async_trait]
/// impl ActorEntity for Sku {
///     type Id = u32;
///     type Create = SkuCreate;
///     type Update = SkuUpdate;
///     type Action = SkuAction;
///     type ActionResult = ();
///     type Context = String;
///     type Error = SkuError;
///
///     fn from_create_params(id: u32, _: SkuCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, code: String::new() })
///     }
///     async fn on_create(&mut self, prefix: &String) -> Result<(), Self::Error> {
///         self.code = format!("{prefix}-{}", self.id);
///         Ok(())
///     }
///     async fn on_update(&mut self, _: SkuUpdate, _: &String) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SkuAction, _: &String) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Sku>::new(10);
///     tokio::spawn(actor.run("WH".to_string()));
///
///     let id = client.create(SkuCreate).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().code, "WH-1");
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: takes the next id from the counter, builds the entity with
///   `from_create_params`, runs `on_create`, then stores it. A failed hook
///   discards the entity; its id is not reused.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **List**: returns clones of every entity in id order.
/// * **Update**: runs `on_update` on a copy and stores it only if the hook succeeds.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` and returns its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client. Ids are numbered 1, 2, 3, ...
    ///
    /// `buffer_size` is the mailbox capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook, so dependencies created after the
    /// actor (other clients, shared services) can still reach it.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "product_inventory::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks mutate in place, so validate on a copy and commit on success.
                        let mut candidate = item.clone();
                        if let Err(e) = candidate.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = candidate;
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
