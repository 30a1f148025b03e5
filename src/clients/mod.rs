//! Typed clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient).

pub mod product_client;

pub use actor_framework::ActorClient;
pub use product_client::ProductClient;
