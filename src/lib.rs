//! Contract layer for a multi-backend copilot.
//!
//! This crate defines how heterogeneous AI providers are represented
//! uniformly, how conversational state is modeled and validated, and how
//! input text is measured against a model's token budget:
//! - Provider abstractions indexed by capability (text, embedding, image)
//! - Strict message, history, and session shapes
//! - Model catalog and token-encoder selection
//!
//! It performs no network I/O itself: concrete vendor adapters implement
//! the provider traits, and persistence of histories and sessions belongs
//! to the owning service.

pub mod config;
pub mod error;
pub mod history;
pub mod message;
pub mod model;
pub mod provider;
pub mod tokenizer;

// Re-export key types
pub use config::{CopilotConfig, FalConfig, OpenAiConfig};
pub use error::{CopilotError, Result};
pub use history::{
    filter_histories, ChatHistory, ChatSessionState, HistoryMessage, ListHistoriesOptions,
    PromptRef,
};
pub use message::{ChatMessage, ParamValue, PromptMessage, Role, SubmittedMessage};
pub use model::{ModelId, ModelPurpose};
pub use provider::{
    Capability, ChatOptions, EmbeddingInput, EmbeddingOptions, ImageOptions, Provider,
    ProviderOptions, ProviderRegistry,
};
pub use tokenizer::{select_encoder, TokenEncoder};
