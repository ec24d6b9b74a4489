use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::itinerary_generation_service::TripPlanner;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /api/health
*/
pub async fn health_check(planner: web::Data<TripPlanner>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    let backend_result = check_generative_backend(&planner);
    health
        .services
        .insert("generative_backend".to_string(), backend_result.clone());

    if backend_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

// Configuration check only, no model call
fn check_generative_backend(planner: &TripPlanner) -> ServiceStatus {
    let model = planner.model_id();
    if model.trim().is_empty() {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("No generative model configured".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Model {} configured", model)),
        }
    }
}
