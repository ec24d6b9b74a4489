use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::error::TripError;
use crate::models::chat::{ChatExchange, MISSING_MESSAGE_MESSAGE};
use crate::models::itinerary::{Itinerary, ItineraryRequest};
use crate::services::assistant::{BackendError, GenerativeBackend};
use crate::services::fallback_itinerary::fallback_itinerary;
use crate::services::prompt_builder::{build_chat_prompt, build_itinerary_prompt};
use crate::services::response_sanitizer::{sanitize_chat_reply, sanitize_itinerary_text};
use crate::services::schema_normalizer::normalize_itinerary;

/// Result of asking the model for an itinerary, before any fallback is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(Itinerary),
    BackendFailed(BackendError),
    Malformed(String),
}

/// Runs the itinerary pipeline (prompt, model, sanitize, normalize) and the
/// trip-assistant chat over an injected backend. Holds no per-request state.
#[derive(Clone)]
pub struct TripPlanner {
    backend: Arc<dyn GenerativeBackend>,
}

impl TripPlanner {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    /// Single attempt at a model-written itinerary.
    pub async fn attempt_generation(&self, request: &ItineraryRequest) -> GenerationOutcome {
        let prompt = build_itinerary_prompt(request);

        let raw = match self.backend.generate(&prompt).await {
            Ok(raw) => raw,
            Err(err) => return GenerationOutcome::BackendFailed(err),
        };
        debug!("Raw model response: {}", raw);

        let cleaned = sanitize_itinerary_text(&raw);
        debug!("Sanitized model response: {}", cleaned);

        match normalize_itinerary(&cleaned, request) {
            Ok(itinerary) => GenerationOutcome::Generated(itinerary),
            Err(err) => GenerationOutcome::Malformed(err.0),
        }
    }

    /// Always returns a complete itinerary: anything other than a usable model answer
    /// is replaced by the deterministic fallback.
    pub async fn generate_itinerary(&self, request: &ItineraryRequest) -> Itinerary {
        info!(
            "Generating {}-day {} itinerary for {}",
            request.day_count(),
            request.budget_tier(),
            request.destination()
        );

        match self.attempt_generation(request).await {
            GenerationOutcome::Generated(itinerary) => {
                info!("Using model itinerary for {}", request.destination());
                itinerary
            }
            GenerationOutcome::BackendFailed(err) => {
                warn!("AI generation failed, using fallback itinerary: {}", err);
                fallback_itinerary(request)
            }
            GenerationOutcome::Malformed(reason) => {
                warn!("Failed to parse AI response, using fallback itinerary: {}", reason);
                fallback_itinerary(request)
            }
        }
    }

    /// Free-form travel question. Backend failures are reported, never papered over.
    pub async fn chat(&self, message: &str) -> Result<ChatExchange, TripError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(TripError::invalid(MISSING_MESSAGE_MESSAGE));
        }

        let raw = self
            .backend
            .generate(&build_chat_prompt(message))
            .await
            .map_err(|err| {
                error!("Error in trip assistant chat: {}", err);
                TripError::AssistantUnavailable(err.to_string())
            })?;

        Ok(ChatExchange {
            user_message: message.to_string(),
            assistant_reply: sanitize_chat_reply(&raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{BudgetTier, TimeSlot};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use tokio_test::block_on;

    struct ScriptedBackend {
        reply: Result<String, BackendError>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn planner(reply: Result<String, BackendError>) -> (TripPlanner, Arc<ScriptedBackend>) {
            let backend = Arc::new(ScriptedBackend {
                reply,
                prompts: Mutex::new(Vec::new()),
            });
            (TripPlanner::new(backend.clone()), backend)
        }
    }

    #[async_trait]
    impl GenerativeBackend for ScriptedBackend {
        async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }

    fn request(city: &str, days: u32, budget: BudgetTier) -> ItineraryRequest {
        ItineraryRequest::new(city, days, budget).unwrap()
    }

    fn assert_shape(itinerary: &Itinerary, days: u32) {
        assert_eq!(itinerary.days.len(), days as usize);
        for (i, day) in itinerary.days.iter().enumerate() {
            assert_eq!(day.day as usize, i + 1);
            let slots: Vec<TimeSlot> = day.activities.iter().map(|a| a.time).collect();
            assert_eq!(slots, TimeSlot::ALL.to_vec());
        }
    }

    #[test]
    fn test_prose_response_falls_back() {
        let (planner, backend) =
            ScriptedBackend::planner(Ok("Paris is wonderful, enjoy the cafes!".to_string()));
        let req = request("Paris", 2, BudgetTier::Cheap);

        assert!(matches!(
            block_on(planner.attempt_generation(&req)),
            GenerationOutcome::Malformed(_)
        ));

        let itinerary = block_on(planner.generate_itinerary(&req));
        assert_shape(&itinerary, 2);
        assert_eq!(itinerary, fallback_itinerary(&req));
        assert_eq!(itinerary.days[0].activities[0].cost, "$0-20");
        // One backend call per attempt, no retries
        assert_eq!(backend.prompts.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_backend_failures_fall_back() {
        for failure in [
            BackendError::Timeout,
            BackendError::Unavailable("quota".to_string()),
        ] {
            let (planner, _) = ScriptedBackend::planner(Err(failure.clone()));
            let req = request("Lima", 1, BudgetTier::Moderate);

            assert_eq!(
                block_on(planner.attempt_generation(&req)),
                GenerationOutcome::BackendFailed(failure)
            );
            let itinerary = block_on(planner.generate_itinerary(&req));
            assert_shape(&itinerary, 1);
            assert_eq!(itinerary.days[0].activities[1].cost, "$40-60");
        }
    }

    #[test]
    fn test_fenced_model_answer_is_used() {
        let days: Vec<_> = (0..3)
            .map(|i| {
                json!({
                    "day": 42,
                    "activities": [
                        {"time": "Morning", "title": format!("Brunch {i}"), "description": "Le Marais", "cost": "$80"},
                        {"time": "Afternoon", "title": format!("Gallery {i}"), "description": "Orsay", "cost": "$120"},
                        {"time": "Evening", "title": format!("Opera {i}"), "description": "Garnier", "cost": "$300"}
                    ]
                })
            })
            .collect();
        let raw = format!("```json\n{}\n```", json!({ "days": days }));
        let (planner, backend) = ScriptedBackend::planner(Ok(raw));
        let req = request("Paris", 3, BudgetTier::Luxury);

        let itinerary = block_on(planner.generate_itinerary(&req));
        assert_shape(&itinerary, 3);
        assert_eq!(itinerary.days[0].activities[0].title, "Brunch 0");
        assert_eq!(itinerary.days[2].activities[2].title, "Opera 2");
        assert_eq!(itinerary.days[1].activities[1].description, "Orsay");

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("3-day travel itinerary for Paris with luxury budget"));
    }

    #[test]
    fn test_short_model_answer_falls_back() {
        let raw = json!({"days": [{"activities": []}]}).to_string();
        let (planner, _) = ScriptedBackend::planner(Ok(raw));
        let req = request("Oslo", 2, BudgetTier::Luxury);

        let itinerary = block_on(planner.generate_itinerary(&req));
        assert_eq!(itinerary, fallback_itinerary(&req));
    }

    #[test]
    fn test_chat_sanitizes_reply() {
        let (planner, backend) =
            ScriptedBackend::planner(Ok("**Tip:**\n\n\n•Pack light".to_string()));

        let exchange = block_on(planner.chat("  What should I pack? ")).unwrap();
        assert_eq!(exchange.user_message, "What should I pack?");
        assert_eq!(exchange.assistant_reply, "Tip:\n\n• Pack light");
        assert!(backend.prompts.lock().unwrap()[0].contains("What should I pack?"));
    }

    #[test]
    fn test_chat_surfaces_backend_failure() {
        let (planner, _) = ScriptedBackend::planner(Err(BackendError::Timeout));
        assert!(matches!(
            block_on(planner.chat("hello")),
            Err(TripError::AssistantUnavailable(_))
        ));
    }

    #[test]
    fn test_chat_rejects_blank_message_without_calling_backend() {
        let (planner, backend) = ScriptedBackend::planner(Ok("unused".to_string()));
        assert_eq!(
            block_on(planner.chat("   ")),
            Err(TripError::invalid(MISSING_MESSAGE_MESSAGE))
        );
        assert!(backend.prompts.lock().unwrap().is_empty());
    }
}
