//! OpenAI chat completions

use crate::transport::{post_json, text_at, CompletionRequest, VendorTransport};
use async_trait::async_trait;
use reqwest::Client;
use strokekit_core::{Provider, ProviderError};

/// Body shared by chat-completions style APIs
pub(crate) fn chat_completions_body(request: &CompletionRequest<'_>) -> serde_json::Value {
    serde_json::json!({
        "model": request.model,
        "messages": [
            {"role": "system", "content": request.system_prompt},
            {"role": "user", "content": request.user_prompt},
        ],
        "max_tokens": request.config.max_tokens,
        "temperature": request.config.temperature,
    })
}

pub(crate) const CHAT_CONTENT_POINTER: &str = "/choices/0/message/content";

/// Transport for `POST {base}/chat/completions`
#[derive(Debug, Clone)]
pub struct OpenAiTransport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Provider::OpenAi.default_base_url().to_string(),
        }
    }

    /// Point at a compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl VendorTransport for OpenAiTransport {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let builder = self.client.post(&url).bearer_auth(&self.api_key);
        let body = post_json(
            Provider::OpenAi,
            builder,
            &chat_completions_body(&request),
            request.config.timeout_secs,
        )
        .await?;
        text_at(Provider::OpenAi, &body, CHAT_CONTENT_POINTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokekit_core::ModelConfig;

    #[test]
    fn test_body_carries_model_config() {
        let config = ModelConfig {
            max_tokens: 99,
            timeout_secs: 3,
            temperature: 0.5,
        };
        let request = CompletionRequest {
            model: "gpt-4o-mini",
            system_prompt: "sys",
            user_prompt: "usr",
            config: &config,
        };
        let body = chat_completions_body(&request);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 99);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "usr");
    }
}
