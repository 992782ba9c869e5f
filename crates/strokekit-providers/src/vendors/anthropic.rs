//! Anthropic messages API

use crate::transport::{post_json, text_at, CompletionRequest, VendorTransport};
use async_trait::async_trait;
use reqwest::Client;
use strokekit_core::{Provider, ProviderError};

const API_VERSION: &str = "2023-06-01";

fn messages_body(request: &CompletionRequest<'_>) -> serde_json::Value {
    serde_json::json!({
        "model": request.model,
        "max_tokens": request.config.max_tokens,
        "temperature": request.config.temperature,
        "system": request.system_prompt,
        "messages": [
            {"role": "user", "content": request.user_prompt},
        ],
    })
}

/// Transport for `POST {base}/messages`
#[derive(Debug, Clone)]
pub struct AnthropicTransport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Provider::Anthropic.default_base_url().to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl VendorTransport for AnthropicTransport {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let url = format!("{}/messages", self.base_url.trim_end_matches('/'));
        let builder = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION);
        let body = post_json(
            Provider::Anthropic,
            builder,
            &messages_body(&request),
            request.config.timeout_secs,
        )
        .await?;
        text_at(Provider::Anthropic, &body, "/content/0/text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokekit_core::ModelConfig;

    #[test]
    fn test_system_prompt_is_top_level() {
        let config = ModelConfig::default();
        let request = CompletionRequest {
            model: "claude-3-5-haiku-20241022",
            system_prompt: "sys",
            user_prompt: "usr",
            config: &config,
        };
        let body = messages_body(&request);
        assert_eq!(body["system"], "sys");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["max_tokens"], 250);
    }
}
