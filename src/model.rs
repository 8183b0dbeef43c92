//! Static catalog of known models, grouped by purpose.
//!
//! Adding a vendor model means adding a variant here and, for text-to-text
//! models, making sure encoder selection still picks the right tokenizer.

use serde::{Deserialize, Serialize};

/// What a model is for. Drives token-encoder selection and capability
/// negotiation; never inferred from the wire name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelPurpose {
    TextToText,
    Embedding,
    Moderation,
    TextToImage,
}

/// Known models, addressed by a stable catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    // Text-to-text
    Gpt4Omni,
    Gpt4OmniMini,
    Gpt4,
    Gpt4Turbo,
    Gpt35Turbo,
    // Embedding
    TextEmbedding3Large,
    TextEmbedding3Small,
    TextEmbeddingAda002,
    // Moderation
    TextModerationLatest,
    TextModerationStable,
    // Text-to-image
    DallE3,
}

impl ModelId {
    /// Catalog identifier, the name callers use to address the model.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gpt4Omni => "Gpt4Omni",
            Self::Gpt4OmniMini => "Gpt4OmniMini",
            Self::Gpt4 => "Gpt4",
            Self::Gpt4Turbo => "Gpt4Turbo",
            Self::Gpt35Turbo => "Gpt35Turbo",
            Self::TextEmbedding3Large => "TextEmbedding3Large",
            Self::TextEmbedding3Small => "TextEmbedding3Small",
            Self::TextEmbeddingAda002 => "TextEmbeddingAda002",
            Self::TextModerationLatest => "TextModerationLatest",
            Self::TextModerationStable => "TextModerationStable",
            Self::DallE3 => "DallE3",
        }
    }

    /// Vendor-facing model name sent over the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Gpt4Omni => "gpt-4o",
            Self::Gpt4OmniMini => "gpt-4o-mini",
            Self::Gpt4 => "gpt-4",
            Self::Gpt4Turbo => "gpt-4-turbo",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::TextEmbedding3Large => "text-embedding-3-large",
            Self::TextEmbedding3Small => "text-embedding-3-small",
            Self::TextEmbeddingAda002 => "text-embedding-ada-002",
            Self::TextModerationLatest => "text-moderation-latest",
            Self::TextModerationStable => "text-moderation-stable",
            Self::DallE3 => "dall-e-3",
        }
    }

    pub fn purpose(&self) -> ModelPurpose {
        match self {
            Self::Gpt4Omni | Self::Gpt4OmniMini | Self::Gpt4 | Self::Gpt4Turbo | Self::Gpt35Turbo => {
                ModelPurpose::TextToText
            }
            Self::TextEmbedding3Large | Self::TextEmbedding3Small | Self::TextEmbeddingAda002 => {
                ModelPurpose::Embedding
            }
            Self::TextModerationLatest | Self::TextModerationStable => ModelPurpose::Moderation,
            Self::DallE3 => ModelPurpose::TextToImage,
        }
    }

    /// Every model in the catalog.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Gpt4Omni,
            Self::Gpt4OmniMini,
            Self::Gpt4,
            Self::Gpt4Turbo,
            Self::Gpt35Turbo,
            Self::TextEmbedding3Large,
            Self::TextEmbedding3Small,
            Self::TextEmbeddingAda002,
            Self::TextModerationLatest,
            Self::TextModerationStable,
            Self::DallE3,
        ]
    }

    /// Look up a catalog identifier. Unknown names resolve to `None`, never
    /// an error; callers decide what an unknown model means for them.
    pub fn resolve(identifier: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.name() == identifier)
    }
}
