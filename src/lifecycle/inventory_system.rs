use std::sync::Arc;

use tracing::{error, info};

use crate::clients::ProductClient;
use crate::config::InventoryConfig;
use crate::id_gen::{Clock, ConfigError, IdGenerator, IdSource, SystemClock};

/// The runtime orchestrator for the inventory.
///
/// Builds the node's [`IdGenerator`], starts the product actor with the generator
/// injected as its context and hands out the [`ProductClient`].
///
/// # Example
///
/// ```rust
/// use product_inventory::config::InventoryConfig;
/// use product_inventory::lifecycle::InventorySystem;
/// use product_inventory::model::ProductUpsert;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = InventorySystem::new(&InventoryConfig::default())?;
///
///     let id = system
///         .product_client
///         .create_product(ProductUpsert::new("Widget", 12.0, 3))
///         .await?;
///     assert_eq!(system.product_client.check_stock(id).await?, 3);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct InventorySystem<C: Clock = SystemClock> {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    generator: Arc<IdGenerator<C>>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the system for the configured node, reading the system clock.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &InventoryConfig) -> Result<Self, ConfigError> {
        let generator = Arc::new(IdGenerator::new(config.node_id)?);
        info!(node_id = config.node_id, capacity = config.channel_capacity, "Starting inventory");
        Ok(Self::with_generator(generator, config.channel_capacity))
    }
}

impl<C: Clock + 'static> InventorySystem<C> {
    /// Starts the system around an existing generator.
    ///
    /// The generator may be shared with other callers on this node; it stays the
    /// node's single id authority.
    pub fn with_generator(generator: Arc<IdGenerator<C>>, buffer_size: usize) -> Self {
        let (product_actor, generic_client) = crate::product_actor::new(buffer_size);

        // The product actor mints product ids through the shared generator.
        let ids: Arc<dyn IdSource> = generator.clone();
        let product_handle = tokio::spawn(product_actor.run(ids));

        Self {
            product_client: ProductClient::new(generic_client),
            generator,
            handles: vec![product_handle],
        }
    }

    pub fn id_generator(&self) -> &Arc<IdGenerator<C>> {
        &self.generator
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the actor's channel; the actor drains what is
    /// queued and exits. Clones of the client handed out earlier keep the actor
    /// alive until they are dropped too.
    ///
    /// Returns `Err` if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory...");
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Inventory shutdown complete.");
        Ok(())
    }
}
