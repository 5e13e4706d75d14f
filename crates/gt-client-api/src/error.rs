// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error taxonomy surfaced by every client operation

use gt_api_contract::{ApiErrorBody, FieldError};
use thiserror::Error;

/// Failure of a single client operation
///
/// Local argument checks produce [`ClientApiError::ArgumentInvalid`]; every
/// other variant comes from the connection and is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientApiError {
    #[error("Invalid argument `{argument}`: {reason}")]
    ArgumentInvalid {
        argument: &'static str,
        reason: String,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Validation failed: {message}{}", format_field_errors(.errors))]
    ValidationFailed {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Transport failure: {0}")]
    Transport(String),
}

pub type ClientApiResult<T> = Result<T, ClientApiError>;

fn format_field_errors(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!(" ({})", rendered.join(", "))
}

impl ClientApiError {
    pub(crate) fn argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::ArgumentInvalid {
            argument,
            reason: reason.into(),
        }
    }

    /// Map a non-success HTTP status and its error document onto the taxonomy
    pub fn from_status(status: u16, body: ApiErrorBody) -> Self {
        let message = body.message;
        match status {
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            404 => Self::NotFound { message },
            409 => Self::Conflict { message },
            422 => Self::ValidationFailed {
                message,
                errors: body.errors,
            },
            _ => Self::Server { status, message },
        }
    }

    /// HTTP status associated with this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Conflict { .. } => Some(409),
            Self::ValidationFailed { .. } => Some(422),
            Self::Server { status, .. } => Some(*status),
            Self::ArgumentInvalid { .. } | Self::Transport(_) => None,
        }
    }
}
