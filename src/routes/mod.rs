use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::error::TripError;
use crate::models::api_response::ApiResponse;
use crate::models::chat::MISSING_MESSAGE_MESSAGE;
use crate::models::itinerary::MISSING_FIELDS_MESSAGE;

pub mod health;
pub mod trip;

/// Mounts every route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/trip")
                        .route("/generate", web::post().to(trip::generate))
                        .route("/chat", web::post().to(trip::chat)),
                ),
        );
}

pub fn error_response(err: &TripError) -> HttpResponse {
    HttpResponse::build(err.status_code()).json(ApiResponse::<()>::failure(err))
}

// Unreadable bodies get the same envelope as every other trip error
fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let trip_error = match &err {
        error::JsonPayloadError::Payload(payload_err) => {
            TripError::InternalFault(payload_err.to_string())
        }
        _ if req.path().ends_with("/chat") => TripError::invalid(MISSING_MESSAGE_MESSAGE),
        _ => TripError::invalid(MISSING_FIELDS_MESSAGE),
    };

    error::InternalError::from_response(err, error_response(&trip_error)).into()
}
