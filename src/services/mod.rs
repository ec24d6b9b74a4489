pub mod assistant;
pub mod fallback_itinerary;
pub mod itinerary_generation_service;
pub mod prompt_builder;
pub mod response_sanitizer;
pub mod schema_normalizer;
