use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

use super::interface::{BackendError, GenerativeBackend};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    pub fn into_text(self) -> Result<String, BackendError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(BackendError::Unavailable(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Unavailable("response had no candidates".to_string()))?;
        let finish_reason = candidate.finish_reason;

        let text: String = candidate
            .content
            .unwrap_or_default()
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(BackendError::Unavailable(format!(
                "candidate had no text (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}

/// Google Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

fn map_transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Unavailable(format!("HTTP request failed: {}", err))
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        debug!("Sending prompt to {} ({} chars)", self.model, prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg = match serde_json::from_str::<ApiErrorBody>(&error_text) {
                Ok(body) => match body.error.status {
                    Some(code) => format!("{}: {}", code, body.error.message),
                    None => body.error.message,
                },
                Err(_) => error_text,
            };

            return Err(BackendError::Unavailable(format!(
                "Gemini API returned {}: {}",
                status, error_msg
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::Unavailable(format!("Failed to parse response: {}", e))
                }
            })?
            .into_text()
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_text_joins_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "{\"days\""}, {"text": ": []}"}]}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }));
        assert_eq!(response.into_text().unwrap(), "{\"days\": []}");
    }

    #[test]
    fn test_blocked_prompt_is_unavailable() {
        let response = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        assert_eq!(
            response.into_text(),
            Err(BackendError::Unavailable("prompt blocked: SAFETY".to_string()))
        );
    }

    #[test]
    fn test_empty_candidate_is_unavailable() {
        assert!(parse(json!({})).into_text().is_err());
        assert!(parse(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}))
            .into_text()
            .is_err());
    }

    #[test]
    fn test_endpoint_and_debug_redaction() {
        let client = GeminiClient::new(&GeminiConfig {
            api_key: "secret-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://example.test/v1beta".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(client.model_id(), "gemini-1.5-flash");
        assert!(!format!("{:?}", client).contains("secret-key"));
    }
}
