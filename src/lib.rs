//! # Product Inventory
//!
//! An in-memory product inventory served by a resource actor, with product ids
//! minted by a node-partitioned, mutex-guarded [`IdGenerator`](id_gen::IdGenerator).
//!
//! ## Module Tour
//!
//! - [`id_gen`] - the id generator, its clocks and errors
//! - [`model`] - [`Product`](model::Product) and its payloads
//! - [`product_actor`] - the actor entity, stock actions and [`ProductError`](product_actor::ProductError)
//! - [`clients`] - [`ProductClient`](clients::ProductClient), the typed front door
//! - [`lifecycle`] - [`InventorySystem`](lifecycle::InventorySystem) and tracing setup
//! - [`config`] - environment settings
//!
//! The generic actor plumbing lives in the `actor-framework` workspace crate.
//!
//! ## Running the Demo
//!
//! ```bash
//! INVENTORY_NODE_ID=3 RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod id_gen;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
