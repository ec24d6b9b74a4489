use serde::{Deserialize, Serialize};

use crate::error::TripError;

/// Envelope shared by every trip endpoint: `{ success, data | message [, error] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(err: &TripError) -> Self {
        // Only internal faults carry the underlying detail
        let error = match err {
            TripError::InternalFault(detail) => Some(detail.clone()),
            _ => None,
        };

        Self {
            success: false,
            data: None,
            message: Some(err.client_message()),
            error,
        }
    }
}
