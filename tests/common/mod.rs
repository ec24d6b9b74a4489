use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use tripmate_api::routes;
use tripmate_api::services::assistant::{BackendError, GenerativeBackend};
use tripmate_api::services::itinerary_generation_service::TripPlanner;

/// Backend double that answers every prompt with the same scripted reply.
pub struct ScriptedBackend {
    reply: Result<String, BackendError>,
    pub prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }
}

pub struct TestApp {
    pub backend: Arc<ScriptedBackend>,
}

impl TestApp {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    pub fn failing(err: BackendError) -> Self {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<String, BackendError>) -> Self {
        Self {
            backend: Arc::new(ScriptedBackend {
                reply,
                prompts: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn backend_calls(&self) -> usize {
        self.backend.prompts.lock().unwrap().len()
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let planner = TripPlanner::new(self.backend.clone());

        App::new()
            .app_data(web::Data::new(planner))
            .configure(routes::configure)
    }
}

/// Model answer for `days` days, each with all three slots and a misleading day number.
pub fn model_itinerary_json(days: usize) -> String {
    let days: Vec<serde_json::Value> = (0..days)
        .map(|i| {
            serde_json::json!({
                "day": 99 - i as i64,
                "activities": [
                    {"time": "Morning", "title": format!("Seine cruise {}", i + 1), "description": "Private boat", "cost": "$300"},
                    {"time": "Afternoon", "title": format!("Louvre tour {}", i + 1), "description": "Guided visit", "cost": "$200"},
                    {"time": "Evening", "title": format!("Michelin dinner {}", i + 1), "description": "Tasting menu", "cost": "$450"}
                ]
            })
        })
        .collect();

    serde_json::json!({ "days": days }).to_string()
}
