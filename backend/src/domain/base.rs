/// Base DDD abstractions for the domain layer
use super::validation::{Notification, ValidationError, ValidationHandler, Validator};
use std::fmt::Debug;

/// Trait for value objects - immutable objects defined by their attributes
/// Value objects are equal if all their attributes are equal
pub trait ValueObject: Clone + PartialEq + Eq + Debug {}

/// Trait for entities - objects with identity that can change over time
/// Entities are equal if their IDs are equal, regardless of other attributes
pub trait Entity: Debug {
    type Id: ValueObject;

    fn id(&self) -> &Self::Id;
}

/// Trait for aggregate roots - entities that are loaded and saved as a unit
///
/// Each aggregate type names the validator that checks it, so the choice of
/// rules is made statically per type rather than through overriding.
pub trait AggregateRoot: Entity + Sized {
    type Validator: Validator<Self> + Default;

    /// Run the aggregate's validator against `handler`
    fn validate(&self, handler: &mut dyn ValidationHandler) {
        Self::Validator::default().validate(self, handler);
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// One validation pass failed; carries every violated rule in check order
    #[error("{message}")]
    Notification {
        message: String,
        errors: Vec<ValidationError>,
    },
    /// Entity not found
    #[error("{0}")]
    NotFound(String),
    /// Storage failure with no domain meaning
    #[error("Database error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Wrap a failed notification into a single multi-error failure
    pub fn notification(message: impl Into<String>, notification: Notification) -> Self {
        DomainError::Notification {
            message: message.into(),
            errors: notification.into_errors(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    /// Validation errors carried by this failure; empty for other kinds
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            DomainError::Notification { errors, .. } => errors,
            DomainError::NotFound(_) | DomainError::Persistence(_) => &[],
        }
    }
}
