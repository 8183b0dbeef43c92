//! The provider abstraction.
//!
//! A provider is polymorphic over the capability set it declares: one
//! vendor backend may serve both image generation and image captioning.
//! Each capability has its own operation trait; the base [`Provider`]
//! trait exposes one accessor per capability so the registry can verify at
//! registration time that declared capabilities are actually implemented.

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::capability::Capability;
use super::options::{ChatOptions, EmbeddingInput, EmbeddingOptions, ImageOptions};
use crate::error::Result;
use crate::message::PromptMessage;

/// Lazily produced text fragments. The producer suspends between chunks and
/// must observe the option signal; the consumer may stop iterating early.
pub type TextStream<'a> = BoxStream<'a, Result<String>>;

/// Lazily produced image references.
pub type ImageStream<'a> = BoxStream<'a, Result<String>>;

/// An embedding: one numeric vector per input text, in input order.
pub type Embedding = Vec<f32>;

/// Base contract every backend satisfies, independent of capability.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable vendor/backend tag, for diagnostics and negotiation. Callers
    /// must not branch behavior on it.
    fn name(&self) -> &str;

    /// Capabilities this instance implements. Must agree with the accessor
    /// methods below; the registry rejects a provider that declares a
    /// capability whose accessor returns `None`.
    fn capabilities(&self) -> &[Capability];

    /// Whether the named model is currently usable by this provider. May
    /// perform a network round trip or consult a local catalog.
    async fn is_model_available(&self, model: &str) -> bool;

    fn text_to_text(&self) -> Option<&dyn TextToTextProvider> {
        None
    }

    fn text_to_embedding(&self) -> Option<&dyn TextToEmbeddingProvider> {
        None
    }

    fn text_to_image(&self) -> Option<&dyn TextToImageProvider> {
        None
    }

    fn image_to_text(&self) -> Option<&dyn ImageToTextProvider> {
        None
    }

    fn image_to_image(&self) -> Option<&dyn ImageToImageProvider> {
        None
    }
}

/// Whether a provider actually implements a capability's operation set.
///
/// Exhaustive over [`Capability`]: adding a kind forces adding its accessor
/// here and on [`Provider`] in the same change.
pub fn implements(provider: &dyn Provider, capability: Capability) -> bool {
    match capability {
        Capability::TextToText => provider.text_to_text().is_some(),
        Capability::TextToEmbedding => provider.text_to_embedding().is_some(),
        Capability::TextToImage => provider.text_to_image().is_some(),
        Capability::ImageToText => provider.image_to_text().is_some(),
        Capability::ImageToImage => provider.image_to_image().is_some(),
    }
}

/// Text generation from a message sequence.
#[async_trait]
pub trait TextToTextProvider: Send + Sync {
    /// Generate a single text result. `model` falls back to the provider's
    /// default when `None`.
    async fn generate_text(
        &self,
        messages: &[PromptMessage],
        model: Option<&str>,
        options: ChatOptions,
    ) -> Result<String>;

    /// Generate text as a lazy fragment stream.
    async fn generate_text_stream(
        &self,
        messages: &[PromptMessage],
        model: Option<&str>,
        options: ChatOptions,
    ) -> Result<TextStream<'static>>;
}

/// Embedding generation.
#[async_trait]
pub trait TextToEmbeddingProvider: Send + Sync {
    /// One vector per input, in input order. Vector width follows
    /// `options.dimensions`.
    async fn generate_embedding(
        &self,
        input: EmbeddingInput,
        model: Option<&str>,
        options: EmbeddingOptions,
    ) -> Result<Vec<Embedding>>;
}

/// Image generation from a message sequence.
#[async_trait]
pub trait TextToImageProvider: Send + Sync {
    async fn generate_images(
        &self,
        messages: &[PromptMessage],
        model: Option<&str>,
        options: ImageOptions,
    ) -> Result<Vec<String>>;

    async fn generate_images_stream(
        &self,
        messages: &[PromptMessage],
        model: Option<&str>,
        options: ImageOptions,
    ) -> Result<ImageStream<'static>>;
}

/// Image captioning/understanding. Same shapes as text generation, but the
/// model id is required: there is no sensible vision default.
#[async_trait]
pub trait ImageToTextProvider: Send + Sync {
    async fn generate_text(
        &self,
        messages: &[PromptMessage],
        model: &str,
        options: ChatOptions,
    ) -> Result<String>;

    async fn generate_text_stream(
        &self,
        messages: &[PromptMessage],
        model: &str,
        options: ChatOptions,
    ) -> Result<TextStream<'static>>;
}

/// Image transformation. Same shapes as image generation with a required
/// model id.
#[async_trait]
pub trait ImageToImageProvider: Send + Sync {
    async fn generate_images(
        &self,
        messages: &[PromptMessage],
        model: &str,
        options: ImageOptions,
    ) -> Result<Vec<String>>;

    async fn generate_images_stream(
        &self,
        messages: &[PromptMessage],
        model: &str,
        options: ImageOptions,
    ) -> Result<ImageStream<'static>>;
}
