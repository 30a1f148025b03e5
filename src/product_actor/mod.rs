//! # Product Actor
//!
//! Owns the product catalogue and its stock levels.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] stock movements
//! - [`new()`] - factory for the actor and its client
//!
//! ## Context
//!
//! The actor runs with the node's id generator as its context
//! (`Arc<dyn IdSource>`); every created product gets its
//! [`ProductId`](crate::model::ProductId) from it.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use product_inventory::clients::ProductClient;
//! use product_inventory::id_gen::{IdGenerator, IdSource};
//! use product_inventory::model::ProductUpsert;
//! use product_inventory::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ids: Arc<dyn IdSource> = Arc::new(IdGenerator::new(1)?);
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(ids));
//!
//!     let id = client.create_product(ProductUpsert::new("Widget", 29.99, 100)).await?;
//!     let left = client.decrement_stock(id, 5).await?;
//!     assert_eq!(left, 95);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
