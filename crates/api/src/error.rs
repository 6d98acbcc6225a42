// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use horas::CoreError;
use horas_domain::DomainError;
use horas_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The audit entry for an accepted change could not be written.
    ///
    /// The change itself has been rolled back.
    AuditWriteFailed {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::AuditWriteFailed { message } => {
                write!(f, "Audit write failed, change rolled back: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatus { status } => ApiError::InvalidInput {
            field: String::from("estado"),
            message: format!("'{status}' is not a valid review status"),
        },
        DomainError::InvalidHourName { name } => ApiError::InvalidInput {
            field: String::from("hora"),
            message: format!("'{name}' is not a canonical hour"),
        },
        DomainError::InvalidElementType { value } => ApiError::InvalidInput {
            field: String::from("tipo"),
            message: format!("'{value}' is not a known element type"),
        },
        DomainError::InvalidDate { date_string, error } => ApiError::InvalidInput {
            field: String::from("fecha"),
            message: format!("'{date_string}' is not a valid date: {error}"),
        },
        DomainError::DayNotFound { date } => ApiError::ResourceNotFound {
            resource_type: String::from("Day"),
            message: format!("No calendar entry for {date}"),
        },
        DomainError::HourNotFound { date, hour } => ApiError::ResourceNotFound {
            resource_type: String::from("Hour"),
            message: format!("Hour '{hour}' is not present on {date}"),
        },
        DomainError::ElementNotFound { date, hour, index } => ApiError::ResourceNotFound {
            resource_type: String::from("Element"),
            message: format!("Element {index} does not exist in hour '{hour}' on {date}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DayNotFound(date) => ApiError::ResourceNotFound {
            resource_type: String::from("Day"),
            message: format!("No calendar entry for {date}"),
        },
        PersistenceError::UserNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: msg,
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        _ => ApiError::Internal {
            message: format!("Persistence failure: {err}"),
        },
    }
}
