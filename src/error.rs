use actix_web::http::StatusCode;
use thiserror::Error;

/// Failures a caller of the trip endpoints can observe.
///
/// Backend and parsing failures during itinerary generation never show up here:
/// they are recovered inside the planner by the fallback generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Assistant unavailable: {0}")]
    AssistantUnavailable(String),

    #[error("Internal fault: {0}")]
    InternalFault(String),
}

impl TripError {
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TripError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            TripError::AssistantUnavailable(_) | TripError::InternalFault(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message rendered in the response envelope.
    pub fn client_message(&self) -> String {
        match self {
            TripError::InvalidRequest(msg) => msg.clone(),
            TripError::AssistantUnavailable(_) => {
                "Failed to get response from AI assistant".to_string()
            }
            TripError::InternalFault(_) => "Failed to generate itinerary".to_string(),
        }
    }
}
