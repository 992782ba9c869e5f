//! Google Gemini generateContent
//!
//! Gemini has no system role in this call shape: the system prompt goes in
//! as the first user turn, followed by a short model acknowledgement, then
//! the drawing data. Replies are constrained to the recognition schema.

use crate::transport::{post_json, text_at, CompletionRequest, VendorTransport};
use async_trait::async_trait;
use reqwest::Client;
use strokekit_core::{Provider, ProviderError};

/// Model turn inserted between the system and user prompts
pub const ACKNOWLEDGEMENT: &str = "了解しました。";

/// JSON schema the reply must satisfy
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "shape_id": {"type": "STRING"},
            "score": {"type": "INTEGER"},
            "reason": {"type": "STRING"},
        },
        "required": ["shape_id", "score", "reason"],
    })
}

fn generate_content_body(request: &CompletionRequest<'_>) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            {"role": "user", "parts": [{"text": request.system_prompt}]},
            {"role": "model", "parts": [{"text": ACKNOWLEDGEMENT}]},
            {"role": "user", "parts": [{"text": request.user_prompt}]},
        ],
        "generationConfig": {
            "temperature": request.config.temperature,
            "maxOutputTokens": request.config.max_tokens,
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        },
    })
}

/// Transport for `POST {base}/models/{model}:generateContent`
#[derive(Debug, Clone)]
pub struct GoogleTransport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Provider::Google.default_base_url().to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl VendorTransport for GoogleTransport {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            request.model
        );
        let builder = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key);
        let body = post_json(
            Provider::Google,
            builder,
            &generate_content_body(&request),
            request.config.timeout_secs,
        )
        .await?;
        text_at(Provider::Google, &body, "/candidates/0/content/parts/0/text")
    }
}
