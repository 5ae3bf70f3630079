//! Error payloads returned at the outer boundary.
//!
//! Translates [`DomainError`] into a problem-details body with a status code,
//! keeping transport concerns out of the domain.

use crate::config::Environment;
use crate::domain::{DomainError, ValidationError};
use serde::{Deserialize, Serialize};

pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

const INTERNAL_ERROR_TITLE: &str = "An unexpected error happened";

/// Problem-details body describing a failed operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl ProblemDetails {
    /// Map a domain failure to its boundary representation.
    ///
    /// Validation failures carry the complete error list, missing entities
    /// carry only their message and anything else is reported with a generic
    /// title. The debug rendering of the failure is attached in development.
    pub fn from_domain(error: &DomainError, environment: Environment) -> Self {
        let mut details = match error {
            DomainError::Notification { message, errors } => ProblemDetails {
                title: message.clone(),
                status: STATUS_UNPROCESSABLE_ENTITY,
                errors: Some(errors.clone()),
                trace: None,
            },
            DomainError::NotFound(message) => ProblemDetails {
                title: message.clone(),
                status: STATUS_NOT_FOUND,
                errors: None,
                trace: None,
            },
            DomainError::Persistence(_) => {
                tracing::error!(error = %error, "Unclassified failure reached the boundary");
                ProblemDetails {
                    title: INTERNAL_ERROR_TITLE.to_string(),
                    status: STATUS_INTERNAL_SERVER_ERROR,
                    errors: None,
                    trace: None,
                }
            }
        };

        if environment.is_development() {
            details.trace = Some(format!("{:?}", error));
        }
        details
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}
