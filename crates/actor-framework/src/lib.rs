//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on Tokio: each resource type gets one
//! actor task that owns its entities and serves CRUD requests plus resource-specific
//! actions over a channel.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - domain state, DTOs and hooks
//! 2. **Runtime** ([`ResourceActor`]) - message loop, store, id counter
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Pallet {
//!     id: u32,
//!     units: u32,
//! }
//!
//! #[derive(Debug)] struct PalletCreate { units: u32 }
//! #[derive(Debug)] struct PalletUpdate { units: Option<u32> }
//! #[derive(Debug)] enum PalletAction { Count }
//! #[derive(Debug, thiserror::Error)] #[error("pallet error")] struct PalletError;
//!
//! #[async_trait]
//! impl ActorEntity for Pallet {
//!     type Id = u32;
//!     type Create = PalletCreate;
//!     type Update = PalletUpdate;
//!     type Action = PalletAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = PalletError;
//!
//!     fn from_create_params(id: u32, params: PalletCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, units: params.units })
//!     }
//!
//!     async fn on_update(&mut self, update: PalletUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(units) = update.units { self.units = units; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: PalletAction, _ctx: &()) -> Result<u32, Self::Error> {
//!         match action { PalletAction::Count => Ok(self.units) }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Pallet>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(PalletCreate { units: 12 }).await.unwrap();
//!     let units = client.perform_action(id, PalletAction::Count).await.unwrap();
//!     assert_eq!(units, 12);
//! }
//! ```
//!
//! ## Identifiers
//!
//! [`ResourceActor::new`] numbers entities from 1. Anything else an entity needs at
//! creation (a generated external id, a reservation elsewhere) is done in
//! [`ActorEntity::on_create`] with the injected context; if that hook fails the
//! entity is never stored.
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)` rather than `new()`, so actors can be
//! created first and wired afterwards.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Different actors run in parallel
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from canned expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
