/// Notification-based validation primitives shared by every aggregate
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single violated rule, described by a human readable message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Sink that collects validation errors during a validation pass.
///
/// Appending is the only way to mutate a handler, and errors are reported in
/// the order they were appended. No operation on a handler fails.
pub trait ValidationHandler {
    /// Append a single error, returning the handler for chaining
    fn append(&mut self, error: ValidationError) -> &mut dyn ValidationHandler;

    /// Append every error held by another handler, preserving its order
    fn append_all(&mut self, other: &dyn ValidationHandler) -> &mut dyn ValidationHandler;

    /// All collected errors in insertion order
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Accumulate-all validation handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Notification { errors: Vec::new() }
    }

    /// Create a notification that already holds one error
    pub fn with_error(error: ValidationError) -> Self {
        let mut notification = Notification::new();
        notification.append(error);
        notification
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> &mut dyn ValidationHandler {
        self.errors.push(error);
        self
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> &mut dyn ValidationHandler {
        self.errors.extend(other.errors().iter().cloned());
        self
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Per-type validation algorithm.
///
/// Implementations inspect the target's current field values and append one
/// error per violated rule. They never fail and never mutate the target.
pub trait Validator<T: ?Sized> {
    fn validate(&self, target: &T, handler: &mut dyn ValidationHandler);
}

/// Limits applied by aggregate validators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    pub name_min_length: usize,
    pub name_max_length: usize,
    pub description_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            name_min_length: 3,
            name_max_length: 255,
            description_max_length: 4_000,
        }
    }
}
