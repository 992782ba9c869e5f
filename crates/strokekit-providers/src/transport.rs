//! Vendor transports
//!
//! A transport issues exactly one completion call for one model and returns
//! the raw reply text. Fallback across models is the adapter's job.

use async_trait::async_trait;
use std::time::Duration;
use strokekit_core::{ModelConfig, Provider, ProviderError};

/// One completion call
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    /// Vendor model identifier
    pub model: &'a str,
    pub system_prompt: &'a str,
    pub user_prompt: &'a str,
    pub config: &'a ModelConfig,
}

/// Issues completion calls against one vendor API
#[async_trait]
pub trait VendorTransport: Send + Sync {
    /// Vendor served by this transport
    fn provider(&self) -> Provider;

    /// Perform one call; the reply text may be empty
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError>;
}

/// POST a JSON body and decode the JSON reply
///
/// The per-model timeout is applied to this request only.
pub(crate) async fn post_json(
    provider: Provider,
    request: reqwest::RequestBuilder,
    body: &serde_json::Value,
    timeout_secs: u64,
) -> Result<serde_json::Value, ProviderError> {
    let response = request
        .timeout(Duration::from_secs(timeout_secs))
        .json(body)
        .send()
        .await
        .map_err(|e| transport_error(provider, e, timeout_secs))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            provider: provider.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ProviderError::MalformedResponse {
            provider: provider.to_string(),
            reason: e.to_string(),
        })
}

fn transport_error(provider: Provider, error: reqwest::Error, timeout_secs: u64) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout {
            provider: provider.to_string(),
            timeout_secs,
        }
    } else {
        ProviderError::Request {
            provider: provider.to_string(),
            reason: error.to_string(),
        }
    }
}

/// Pull a string out of a decoded reply by JSON pointer
pub(crate) fn text_at(
    provider: Provider,
    body: &serde_json::Value,
    pointer: &str,
) -> Result<String, ProviderError> {
    body.pointer(pointer)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ProviderError::MalformedResponse {
            provider: provider.to_string(),
            reason: format!("missing {}", pointer),
        })
}

#[async_trait]
impl<T: VendorTransport + ?Sized> VendorTransport for std::sync::Arc<T> {
    fn provider(&self) -> Provider {
        (**self).provider()
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        (**self).complete(request).await
    }
}
