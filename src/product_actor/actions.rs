//! Custom actions for the Product actor.
//!
//! Stock movements beyond plain CRUD. They are applied by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) and every
//! one of them answers with the stock level after the action.

/// Stock operations on a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Receives `u32` units into stock.
    AddStock(u32),
    /// Takes `u32` units out of stock.
    ///
    /// # Errors
    /// Fails without touching the stock if fewer units are available.
    DecrementStock(u32),
}
