//! Provider adapters
//!
//! An adapter binds one vendor transport to an ordered list of models and
//! turns a drawing into a [`RecognitionResult`]. Models are tried strictly
//! in order, one call each; the first non-empty reply is parsed and the
//! remaining models are never called.

use crate::prompt::{Prompt, PromptBuilder};
use crate::response_parser::parse_response;
use crate::transport::{CompletionRequest, VendorTransport};
use crate::vendors::{AnthropicTransport, GoogleTransport, MistralTransport, OpenAiTransport};
use async_trait::async_trait;
use strokekit_core::{
    DrawingData, ModelSpec, Provider, ProviderError, RecognitionResult, ShapeCatalog,
};
use strokekit_features::DrawingFeatures;
use uuid::Uuid;

/// Message of the failed result when no model produced a reply
pub const NO_RESPONSE_MESSAGE: &str = "No response from AI service";

/// Recognition capability shared by every vendor
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn provider(&self) -> Provider;

    /// False when the adapter has no credentials or no models
    fn is_enabled(&self) -> bool;

    /// Models in attempt order
    fn models(&self) -> &[ModelSpec];

    /// `"{Provider}_{model}"` of the first configured model
    fn model_name(&self) -> String {
        self.provider()
            .model_name(self.models().first().map(|m| m.id.as_str()))
    }

    /// Recognize the drawing; never fails, errors become failed results
    async fn recognize(
        &self,
        drawing: &DrawingData,
        catalog: &ShapeCatalog,
        features: &DrawingFeatures,
    ) -> RecognitionResult;
}

/// Non-empty reply and the model that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub model: String,
    pub text: String,
}

/// Adapter over a chat-style vendor transport
pub struct ChatAdapter<T> {
    provider: Provider,
    models: Vec<ModelSpec>,
    transport: Option<T>,
    prompts: PromptBuilder,
}

pub type OpenAiAdapter = ChatAdapter<OpenAiTransport>;
pub type GoogleAdapter = ChatAdapter<GoogleTransport>;
pub type AnthropicAdapter = ChatAdapter<AnthropicTransport>;
pub type MistralAdapter = ChatAdapter<MistralTransport>;

impl<T: VendorTransport> ChatAdapter<T> {
    /// Adapter calling `models` in order through `transport`
    pub fn new(transport: T, models: Vec<ModelSpec>) -> Self {
        Self {
            provider: transport.provider(),
            models,
            transport: Some(transport),
            prompts: PromptBuilder::new(),
        }
    }

    /// Adapter that never performs I/O
    pub fn disabled(provider: Provider) -> Self {
        Self {
            provider,
            models: Vec::new(),
            transport: None,
            prompts: PromptBuilder::new(),
        }
    }

    /// Try each model once, in order, until one replies with text
    pub async fn call_models(&self, prompt: &Prompt) -> Option<ModelReply> {
        let transport = self.transport.as_ref()?;

        for spec in &self.models {
            let request = CompletionRequest {
                model: &spec.id,
                system_prompt: &prompt.system,
                user_prompt: &prompt.user,
                config: &spec.config,
            };
            match non_empty(self.provider, transport.complete(request).await) {
                Ok(text) => {
                    return Some(ModelReply {
                        model: spec.id.clone(),
                        text,
                    });
                }
                Err(e) => {
                    tracing::warn!("Error with {} model {}: {}", self.provider, spec.id, e);
                }
            }
        }
        None
    }
}

/// Blank replies count as a failed call
fn non_empty(
    provider: Provider,
    reply: Result<String, ProviderError>,
) -> Result<String, ProviderError> {
    match reply {
        Ok(text) if text.trim().is_empty() => Err(ProviderError::EmptyResponse {
            provider: provider.to_string(),
        }),
        other => other,
    }
}

#[async_trait]
impl<T: VendorTransport> ProviderAdapter for ChatAdapter<T> {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn is_enabled(&self) -> bool {
        self.transport.is_some() && !self.models.is_empty()
    }

    fn models(&self) -> &[ModelSpec] {
        &self.models
    }

    async fn recognize(
        &self,
        drawing: &DrawingData,
        catalog: &ShapeCatalog,
        features: &DrawingFeatures,
    ) -> RecognitionResult {
        if !self.is_enabled() {
            tracing::debug!("{} adapter is disabled", self.provider);
            return RecognitionResult::failure(NO_RESPONSE_MESSAGE)
                .with_model(self.provider.model_name(None), "");
        }

        let result_id = Uuid::new_v4().to_string();
        let prompt = self.prompts.build(catalog, features);
        tracing::debug!("System prompt for {}:\n{}", drawing.drawing_id, prompt.system);
        tracing::debug!("User prompt for {}:\n{}", drawing.drawing_id, prompt.user);

        let Some(reply) = self.call_models(&prompt).await else {
            tracing::error!(
                "No {} model answered for drawing {}",
                self.provider,
                drawing.drawing_id
            );
            return RecognitionResult::failure(NO_RESPONSE_MESSAGE)
                .with_model(self.provider.model_name(None), "");
        };

        let model_name = self.provider.model_name(Some(&reply.model));
        match parse_response(&reply.text, catalog) {
            Ok(parsed) => RecognitionResult::success(
                result_id,
                parsed.shape_id,
                parsed.score,
                parsed.reason,
                model_name,
                reply.text,
            ),
            Err(e) => {
                tracing::error!("Error parsing response from {}: {}", model_name, e);
                RecognitionResult::failure(e.to_string()).with_model(model_name, reply.text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::ScriptedTransport;
    use strokekit_core::ModelConfig;

    #[test]
    fn test_disabled_adapter() {
        let adapter = OpenAiAdapter::disabled(Provider::OpenAi);
        assert!(!adapter.is_enabled());
        assert_eq!(adapter.model_name(), "OpenAI_unknown");
    }

    #[test]
    fn test_adapter_without_models_is_disabled() {
        let adapter = ChatAdapter::new(ScriptedTransport::new(Provider::Mistral), Vec::new());
        assert!(!adapter.is_enabled());
        assert_eq!(adapter.provider(), Provider::Mistral);
    }

    #[test]
    fn test_model_name_uses_first_model() {
        let adapter = ChatAdapter::new(
            ScriptedTransport::new(Provider::Google),
            vec![
                ModelSpec::new("gemini-1.5-pro", ModelConfig::default()),
                ModelSpec::new("gemini-1.5-flash", ModelConfig::default()),
            ],
        );
        assert_eq!(adapter.model_name(), "Google_gemini-1.5-pro");
    }

    #[test]
    fn test_blank_reply_is_empty_response() {
        let err = non_empty(Provider::Anthropic, Ok("  \n".to_string())).unwrap_err();
        assert_eq!(
            err,
            ProviderError::EmptyResponse {
                provider: "Anthropic".to_string()
            }
        );
        assert_eq!(err.to_string(), "Empty response from Anthropic");

        assert_eq!(non_empty(Provider::Anthropic, Ok("{}".to_string())), Ok("{}".to_string()));
    }
}
