use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Network, auth, quota or an unusable upstream reply.
    #[error("generative backend unavailable: {0}")]
    Unavailable(String),

    #[error("generative backend timed out")]
    Timeout,
}

/// Boundary to the text-generation service. One call is one outbound request;
/// implementations do not retry.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;

    fn model_id(&self) -> &str;
}
