//! Canned-reply transport for tests
//!
//! Built for this crate's tests and, with the `test-support` feature, for
//! downstream crates that drive adapters without network access.

use crate::transport::{CompletionRequest, VendorTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use strokekit_core::{Provider, ProviderError};

/// Transport answering from canned replies keyed by model
///
/// Models without a scripted reply fail with a request error.
pub struct ScriptedTransport {
    provider: Provider,
    replies: HashMap<String, Result<String, ProviderError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `model` with `text`
    pub fn reply(mut self, model: impl Into<String>, text: impl Into<String>) -> Self {
        self.replies.insert(model.into(), Ok(text.into()));
        self
    }

    /// Fail every call to `model` with `error`
    pub fn fail(mut self, model: impl Into<String>, error: ProviderError) -> Self {
        self.replies.insert(model.into(), Err(error));
        self
    }

    /// Models called so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl VendorTransport for ScriptedTransport {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        self.calls.lock().push(request.model.to_string());
        match self.replies.get(request.model) {
            Some(reply) => reply.clone(),
            None => Err(ProviderError::Request {
                provider: self.provider.to_string(),
                reason: format!("no scripted reply for {}", request.model),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokekit_core::ModelConfig;

    #[tokio::test]
    async fn test_scripted_transport_records_calls() {
        let transport = ScriptedTransport::new(Provider::Google).reply("m1", "{}");
        let config = ModelConfig::default();
        let request = CompletionRequest {
            model: "m1",
            system_prompt: "s",
            user_prompt: "u",
            config: &config,
        };
        assert_eq!(transport.complete(request).await.unwrap(), "{}");

        let missing = CompletionRequest { model: "m2", ..request };
        assert!(transport.complete(missing).await.is_err());
        assert_eq!(transport.calls(), vec!["m1", "m2"]);
    }
}
