//! Provider registration and capability lookup.

use std::sync::Arc;

use super::capability::Capability;
use super::traits::{implements, Provider};
use crate::error::{CopilotError, Result};

/// Holds registered providers and answers "who can do X".
///
/// Selection among multiple providers declaring the same capability, and
/// any retry/fallback policy, belongs to the caller: `provider_for` returns
/// the first registrant, `providers_for` the full candidate list in
/// registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider after checking that every declared capability is
    /// actually implemented.
    pub fn register(&mut self, provider: Arc<dyn Provider>) -> Result<()> {
        for capability in provider.capabilities() {
            if !implements(provider.as_ref(), *capability) {
                return Err(CopilotError::Misconfigured(format!(
                    "provider '{}' declares {} but does not implement its operations",
                    provider.name(),
                    capability
                )));
            }
        }
        tracing::debug!(
            provider = provider.name(),
            capabilities = ?provider.capabilities(),
            "registered copilot provider"
        );
        self.providers.push(provider);
        Ok(())
    }

    /// The first registered provider declaring `capability`.
    pub fn provider_for(&self, capability: Capability) -> Result<Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|p| p.capabilities().contains(&capability))
            .cloned()
            .ok_or(CopilotError::CapabilityUnavailable(capability))
    }

    /// Every provider declaring `capability`, in registration order.
    pub fn providers_for(&self, capability: Capability) -> Vec<Arc<dyn Provider>> {
        self.providers
            .iter()
            .filter(|p| p.capabilities().contains(&capability))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::PromptMessage;
    use crate::model::ModelId;
    use crate::provider::options::{ChatOptions, EmbeddingInput, EmbeddingOptions};
    use crate::provider::traits::{
        Embedding, TextStream, TextToEmbeddingProvider, TextToTextProvider,
    };
    use async_trait::async_trait;
    use futures::StreamExt;

    /// Backend stub serving both text generation and embeddings.
    struct EchoProvider;

    const ECHO_CAPABILITIES: &[Capability] = &[Capability::TextToText, Capability::TextToEmbedding];

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn capabilities(&self) -> &[Capability] {
            ECHO_CAPABILITIES
        }

        async fn is_model_available(&self, model: &str) -> bool {
            ModelId::resolve(model).is_some()
        }

        fn text_to_text(&self) -> Option<&dyn TextToTextProvider> {
            Some(self)
        }

        fn text_to_embedding(&self) -> Option<&dyn TextToEmbeddingProvider> {
            Some(self)
        }
    }

    #[async_trait]
    impl TextToTextProvider for EchoProvider {
        async fn generate_text(
            &self,
            messages: &[PromptMessage],
            _model: Option<&str>,
            options: ChatOptions,
        ) -> Result<String> {
            if options.common.cancelled() {
                return Err(CopilotError::Cancelled);
            }
            Ok(messages.last().map(|m| m.content.clone()).unwrap_or_default())
        }

        async fn generate_text_stream(
            &self,
            messages: &[PromptMessage],
            _model: Option<&str>,
            options: ChatOptions,
        ) -> Result<TextStream<'static>> {
            if options.common.cancelled() {
                return Err(CopilotError::Cancelled);
            }
            let chunks: Vec<String> = messages
                .last()
                .map(|m| m.content.split_whitespace().map(String::from).collect())
                .unwrap_or_default();
            let signal = options.common.signal.clone();
            let stream = futures::stream::iter(chunks)
                .take_while(move |_| {
                    let live = signal.as_ref().map_or(true, |t| !t.is_cancelled());
                    futures::future::ready(live)
                })
                .map(Ok)
                .boxed();
            Ok(stream)
        }
    }

    #[async_trait]
    impl TextToEmbeddingProvider for EchoProvider {
        async fn generate_embedding(
            &self,
            input: EmbeddingInput,
            _model: Option<&str>,
            options: EmbeddingOptions,
        ) -> Result<Vec<Embedding>> {
            Ok(input
                .texts()
                .iter()
                .map(|t| vec![t.len() as f32; options.dimensions])
                .collect())
        }
    }

    /// Declares an embedding capability without implementing it.
    struct BrokenProvider;

    #[async_trait]
    impl Provider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        fn capabilities(&self) -> &[Capability] {
            &[Capability::TextToEmbedding]
        }

        async fn is_model_available(&self, _model: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_registration_rejects_undeclared_operations() {
        let mut registry = ProviderRegistry::new();
        let err = registry.register(Arc::new(BrokenProvider)).unwrap_err();
        assert!(matches!(err, CopilotError::Misconfigured(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_multi_capability_provider_serves_both() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(EchoProvider)).unwrap();

        let text = registry.provider_for(Capability::TextToText).unwrap();
        let embed = registry.provider_for(Capability::TextToEmbedding).unwrap();
        assert_eq!(text.name(), "echo");
        assert_eq!(embed.name(), "echo");
    }

    #[test]
    fn test_missing_capability_is_a_distinct_condition() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(EchoProvider)).unwrap();

        let err = registry
            .provider_for(Capability::ImageToImage)
            .err()
            .expect("lookup for an undeclared capability should fail");
        assert!(matches!(
            err,
            CopilotError::CapabilityUnavailable(Capability::ImageToImage)
        ));
        assert!(registry.providers_for(Capability::ImageToImage).is_empty());
    }

    #[tokio::test]
    async fn test_generate_text_through_registry() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(EchoProvider)).unwrap();

        let provider = registry.provider_for(Capability::TextToText).unwrap();
        let ops = provider.text_to_text().unwrap();
        let reply = ops
            .generate_text(
                &[PromptMessage::user("hello there")],
                Some("Gpt4Omni"),
                ChatOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(reply, "hello there");
        assert!(provider.is_model_available("Gpt4Omni").await);
        assert!(!provider.is_model_available("not-a-real-model").await);
    }

    #[tokio::test]
    async fn test_embedding_order_and_dimensions() {
        let provider = EchoProvider;
        let vectors = provider
            .generate_embedding(
                vec!["a".to_string(), "bbb".to_string()].into(),
                Some("TextEmbedding3Small"),
                EmbeddingOptions::new(4),
            )
            .await
            .unwrap();
        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.len() == 4));
        assert!(vectors[0][0] < vectors[1][0]);
    }

    #[tokio::test]
    async fn test_stream_stops_after_cancellation() {
        use tokio_util::sync::CancellationToken;

        let provider = EchoProvider;
        let token = CancellationToken::new();
        let options = ChatOptions {
            common: crate::provider::options::ProviderOptions {
                signal: Some(token.clone()),
                user: None,
            },
            ..Default::default()
        };
        let mut stream = provider
            .generate_text_stream(&[PromptMessage::user("one two three")], None, options)
            .await
            .unwrap();

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first, "one");

        // Cancel mid-stream: the sequence ends without a failure.
        token.cancel();
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_cancellation_before_output_is_explicit() {
        use tokio_util::sync::CancellationToken;

        let provider = EchoProvider;
        let token = CancellationToken::new();
        token.cancel();
        let options = ChatOptions {
            common: crate::provider::options::ProviderOptions {
                signal: Some(token),
                user: None,
            },
            ..Default::default()
        };
        let err = provider
            .generate_text_stream(&[PromptMessage::user("never")], None, options)
            .await
            .err()
            .expect("pre-output cancellation is reported");
        assert!(matches!(err, CopilotError::Cancelled));
    }
}
