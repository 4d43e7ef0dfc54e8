use thiserror::Error;

use crate::Arity;

/// Errors returned by event subscription management.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The handle passed to `unsubscribe` is not currently subscribed.
    #[error("subscriber not found (arity {arity})")]
    SubscriberNotFound { arity: Arity },
}

/// Errors returned by singleton guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SingletonError {
    /// A second construction was attempted for a type whose slot is already filled.
    #[error("An instance of {type_name} already exists")]
    Violation { type_name: &'static str },

    /// The instance was requested before the type was ever constructed.
    #[error("No instance of {type_name} has been constructed")]
    NotConstructed { type_name: &'static str },

    /// The slot holds a value that does not downcast to the requested type.
    #[error("Type mismatch in singleton slot for type: {type_name}")]
    TypeMismatch { type_name: &'static str },
}

impl SingletonError {
    /// The type the error refers to, as reported by `std::any::type_name`.
    pub fn type_name(&self) -> &'static str {
        match self {
            SingletonError::Violation { type_name }
            | SingletonError::NotConstructed { type_name }
            | SingletonError::TypeMismatch { type_name } => type_name,
        }
    }
}
