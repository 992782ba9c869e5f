//! # StrokeKit Providers
//!
//! LLM vendor integration for shape recognition.
//! Builds prompts from drawing features, calls vendor APIs through
//! per-vendor transports with ordered model fallback, and parses replies
//! into canonical recognition results.

pub mod adapter;
pub mod factory;
pub mod prompt;
pub mod response_parser;
#[cfg(any(test, feature = "test-support"))]
pub mod scripted;
pub mod transport;
pub mod vendors;

pub use adapter::{
    AnthropicAdapter, ChatAdapter, GoogleAdapter, MistralAdapter, ModelReply, OpenAiAdapter,
    ProviderAdapter, NO_RESPONSE_MESSAGE,
};
pub use factory::{build_adapter, check_options, AdapterOptions};
pub use prompt::{Prompt, PromptBuilder};
pub use response_parser::{parse_response, strip_code_fence, ParsedResponse};
#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedTransport;
pub use transport::{CompletionRequest, VendorTransport};
pub use vendors::{AnthropicTransport, GoogleTransport, MistralTransport, OpenAiTransport};
