use actix_web::{web, HttpResponse, Responder};
use log::info;

use crate::models::api_response::ApiResponse;
use crate::models::chat::{ChatInput, ChatReply};
use crate::models::itinerary::GenerateTripInput;
use crate::routes::error_response;
use crate::services::itinerary_generation_service::TripPlanner;

/*
    /api/trip/generate
*/
pub async fn generate(
    planner: web::Data<TripPlanner>,
    input: web::Json<GenerateTripInput>,
) -> impl Responder {
    let input = input.into_inner();
    info!(
        "Received itinerary request: city={:?} days={:?} budget={:?}",
        input.city, input.days, input.budget
    );

    let request = match input.into_request() {
        Ok(request) => request,
        Err(err) => return error_response(&err),
    };

    let itinerary = planner.generate_itinerary(&request).await;
    HttpResponse::Ok().json(ApiResponse::ok(itinerary))
}

/*
    /api/trip/chat
*/
pub async fn chat(planner: web::Data<TripPlanner>, input: web::Json<ChatInput>) -> impl Responder {
    let message = input.into_inner().message.unwrap_or_default();

    match planner.chat(&message).await {
        Ok(exchange) => HttpResponse::Ok().json(ApiResponse::ok(ChatReply::from(exchange))),
        Err(err) => error_response(&err),
    }
}
