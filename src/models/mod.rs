pub mod api_response;
pub mod chat;
pub mod itinerary;
