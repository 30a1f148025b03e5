//! # Framework Errors
//!
//! Errors raised by the plumbing between clients and actors. Failures coming from an
//! entity's own hooks travel inside [`FrameworkError::EntityError`] and can be
//! recovered with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Unwraps an [`EntityError`](FrameworkError::EntityError) back into the entity's
    /// concrete error type.
    ///
    /// Any other variant, or an entity error of a different type, is handed back
    /// unchanged in `Err`.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn recovers_typed_entity_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.into_entity_error::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn foreign_errors_are_handed_back() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.into_entity_error::<OutOfStock>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let closed = FrameworkError::ActorClosed.into_entity_error::<OutOfStock>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
