//! HTTP transports for the supported vendors
//!
//! Supported vendors:
//! - OpenAI: chat completions
//! - Google: Gemini generateContent with structured JSON output
//! - Anthropic: messages API
//! - Mistral: OpenAI-compatible chat completions

pub mod anthropic;
pub mod google;
pub mod mistral;
pub mod openai;

pub use anthropic::AnthropicTransport;
pub use google::GoogleTransport;
pub use mistral::MistralTransport;
pub use openai::OpenAiTransport;
