//! Per-call options passed to provider operations.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Fields common to every capability.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    /// Cooperative cancellation. A provider observes the token at its next
    /// suspension point and stops producing output once it fires; output
    /// already yielded is not retracted.
    pub signal: Option<CancellationToken>,
    /// Opaque caller identity forwarded for vendor-side accounting.
    pub user: Option<String>,
}

impl ProviderOptions {
    pub fn cancelled(&self) -> bool {
        self.signal.as_ref().map_or(false, |t| t.is_cancelled())
    }
}

/// Options for text generation.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    pub common: ProviderOptions,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Options for embedding generation. `dimensions` is required: the caller
/// must know the vector width it is storing.
#[derive(Debug, Clone)]
pub struct EmbeddingOptions {
    pub common: ProviderOptions,
    pub dimensions: usize,
}

impl EmbeddingOptions {
    pub fn new(dimensions: usize) -> Self {
        Self {
            common: ProviderOptions::default(),
            dimensions,
        }
    }
}

/// Options for image generation.
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    pub common: ProviderOptions,
    /// Fixed seed for reproducible generations, when the vendor supports it.
    pub seed: Option<u64>,
}

/// Embedding input: one string or an ordered batch. Output vectors come
/// back one per input, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

impl EmbeddingInput {
    pub fn texts(&self) -> &[String] {
        match self {
            Self::Single(text) => std::slice::from_ref(text),
            Self::Batch(texts) => texts,
        }
    }
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for EmbeddingInput {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(texts: Vec<String>) -> Self {
        Self::Batch(texts)
    }
}
