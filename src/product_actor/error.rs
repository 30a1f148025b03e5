//! Error types for the Product actor.

use thiserror::Error;

use crate::id_gen::ClockError;
use crate::model::RecordId;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(RecordId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The quantity is zero, or adding it would overflow the stock counter.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The payload failed validation.
    #[error("Invalid product: {0}")]
    Validation(String),

    /// No id could be minted for a new product.
    #[error("Product id generation failed: {0}")]
    IdGeneration(#[from] ClockError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
