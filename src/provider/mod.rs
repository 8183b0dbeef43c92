//! Capability-indexed provider abstraction.
//!
//! Callers ask the registry for "the provider that can do X" without
//! knowing which vendor implements it; a single backend may declare several
//! capabilities at once.

pub mod capability;
pub mod options;
pub mod registry;
pub mod traits;

pub use capability::Capability;
pub use options::{ChatOptions, EmbeddingInput, EmbeddingOptions, ImageOptions, ProviderOptions};
pub use registry::ProviderRegistry;
pub use traits::{
    implements, Embedding, ImageStream, ImageToImageProvider, ImageToTextProvider, Provider,
    TextStream, TextToEmbeddingProvider, TextToImageProvider, TextToTextProvider,
};
