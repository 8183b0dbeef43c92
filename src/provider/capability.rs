//! The closed set of capability kinds a provider may declare.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named class of AI operation. Each kind maps to exactly one operation
/// contract in `traits`; the pairing is kept total by the exhaustive match
/// in [`crate::provider::implements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    TextToText,
    TextToEmbedding,
    TextToImage,
    ImageToText,
    ImageToImage,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TextToText => "text-to-text",
            Self::TextToEmbedding => "text-to-embedding",
            Self::TextToImage => "text-to-image",
            Self::ImageToText => "image-to-text",
            Self::ImageToImage => "image-to-image",
        }
    }

    /// Every capability kind.
    pub fn all() -> Vec<Self> {
        vec![
            Self::TextToText,
            Self::TextToEmbedding,
            Self::TextToImage,
            Self::ImageToText,
            Self::ImageToImage,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capability_names_round_trip() {
        for capability in Capability::all() {
            let value = serde_json::to_value(capability).unwrap();
            assert_eq!(value, json!(capability.name()));
            let parsed: Capability = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, capability);
        }
    }

    #[test]
    fn test_unknown_capability_is_rejected() {
        assert!(serde_json::from_value::<Capability>(json!("text-to-music")).is_err());
    }
}
