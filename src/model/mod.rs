//! Domain data types managed by the actors.

pub mod product;

pub use product::*;
