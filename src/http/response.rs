//! Uniform response envelope
//!
//! Every endpoint wraps its payload in `ApiResponse`; fields that do not
//! apply are omitted from the serialized JSON entirely.

use serde::Serialize;

use crate::models::{FieldError, PageMeta};

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            details: None,
            pagination: None,
        }
    }

    /// Successful response with a human-readable message.
    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            message: Some(message),
            ..Self::data(data)
        }
    }

    /// Successful windowed response.
    pub fn paginated(data: T, pagination: PageMeta) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::data(data)
        }
    }
}

impl ApiResponse<()> {
    /// Failure response with an error description.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            details: None,
            pagination: None,
        }
    }

    /// Failure response listing the violated fields.
    pub fn error_with_details(error: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            details: Some(details),
            ..Self::error(error)
        }
    }
}
