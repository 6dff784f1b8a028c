//! OpenAI-compatible chat-completions gateway
//!
//! Talks to any endpoint exposing the `/chat/completions` shape (Groq,
//! OpenAI, local OpenAI-compatible servers). One request per `generate`
//! call, with a per-request timeout; no retries here — the dispatcher
//! treats every call as at-most-once.

use async_trait::async_trait;
use council_application::ports::backend_gateway::{BackendError, BackendGateway};
use council_domain::Backend;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

/// Default public endpoint (the Groq API, as used by the original deployment)
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP adapter for OpenAI-compatible chat-completions endpoints.
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ChatCompletionsGateway {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Map a non-success HTTP status to the backend error taxonomy.
fn status_error(status: StatusCode, detail: String) -> BackendError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => BackendError::RateLimited(detail),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => BackendError::Timeout(detail),
        _ => BackendError::InvalidResponse(detail),
    }
}

/// Pull the generated text out of a chat-completions payload.
fn extract_content(payload: &Value) -> Result<String, BackendError> {
    payload
        .get("choices")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("message"))
        .and_then(|v| v.get("content"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            BackendError::InvalidResponse("response has no choices[0].message.content".to_string())
        })
}

#[async_trait]
impl BackendGateway for ChatCompletionsGateway {
    async fn generate(
        &self,
        backend: &Backend,
        directive: &str,
        prompt: &str,
    ) -> Result<String, BackendError> {
        let body = json!({
            "model": backend.model,
            "messages": [
                {"role": "system", "content": directive},
                {"role": "user", "content": prompt},
            ],
            "temperature": backend.temperature,
            "max_tokens": backend.max_tokens,
        });

        debug!(backend = %backend.id, model = %backend.model, "issuing chat completion");

        let mut request = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout(format!("no response within {:?}", self.timeout))
            } else {
                BackendError::InvalidResponse(format!("request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(status_error(
                status,
                format!("HTTP {status}: {}", detail.chars().take(200).collect::<String>()),
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("malformed payload: {e}")))?;
        extract_content(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let detail = || "d".to_string();
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, detail()),
            BackendError::RateLimited(_)
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, detail()),
            BackendError::Unauthorized(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, detail()),
            BackendError::Unauthorized(_)
        ));
        assert!(matches!(
            status_error(StatusCode::GATEWAY_TIMEOUT, detail()),
            BackendError::Timeout(_)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, detail()),
            BackendError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_extract_content() {
        let payload = json!({
            "choices": [{"message": {"role": "assistant", "content": "an answer"}}]
        });
        assert_eq!(extract_content(&payload).unwrap(), "an answer");
    }

    #[test]
    fn test_extract_content_missing_is_invalid_response() {
        let payload = json!({"choices": []});
        assert!(matches!(
            extract_content(&payload),
            Err(BackendError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = ChatCompletionsGateway::new("https://api.example.com/v1/", None);
        assert_eq!(
            gateway.endpoint(),
            "https://api.example.com/v1/chat/completions"
        );
    }
}
