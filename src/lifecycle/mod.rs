//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors of one inventory node.
//!
//! [`InventorySystem`] owns the node's [`IdGenerator`](crate::id_gen::IdGenerator).
//! The product actor is created first and receives the generator through
//! `run(context)`, as an `Arc<dyn IdSource>`:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(buffer_size);
//! let ids: Arc<dyn IdSource> = generator.clone();
//! tokio::spawn(product_actor.run(ids));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - [`InventorySystem::shutdown`] joins every actor task
//!
//! ## Observability
//!
//! [`setup_tracing`] configures structured logging; see the [`tracing`](self::tracing) module.

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use self::tracing::setup_tracing;
