//! Mistral chat completions

use super::openai::{chat_completions_body, CHAT_CONTENT_POINTER};
use crate::transport::{post_json, text_at, CompletionRequest, VendorTransport};
use async_trait::async_trait;
use reqwest::Client;
use strokekit_core::{Provider, ProviderError};

/// Transport for `POST {base}/chat/completions` on the Mistral platform
#[derive(Debug, Clone)]
pub struct MistralTransport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl MistralTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Provider::Mistral.default_base_url().to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl VendorTransport for MistralTransport {
    fn provider(&self) -> Provider {
        Provider::Mistral
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let builder = self.client.post(&url).bearer_auth(&self.api_key);
        let body = post_json(
            Provider::Mistral,
            builder,
            &chat_completions_body(&request),
            request.config.timeout_secs,
        )
        .await?;
        text_at(Provider::Mistral, &body, CHAT_CONTENT_POINTER)
    }
}
