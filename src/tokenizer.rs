//! Token-encoder selection for budgeting input against a model's window.
//!
//! Callers consult this speculatively before deciding whether to chunk
//! input, so selection must degrade gracefully: an unknown model yields
//! "no encoder", never an error.

use tiktoken_rs::CoreBPE;

use crate::message::PromptMessage;
use crate::model::ModelId;

// Approximate per-message and per-reply framing overhead used by chat
// completion endpoints.
const TOKENS_PER_MESSAGE: usize = 4;
const TOKENS_PER_REPLY: usize = 2;

/// A byte-pair encoder bound to a model family.
pub struct TokenEncoder {
    bpe: CoreBPE,
}

impl TokenEncoder {
    /// Encoder for a specific chat-completion model, when tiktoken knows it.
    fn for_model(wire_name: &str) -> Option<Self> {
        tiktoken_rs::get_bpe_from_model(wire_name)
            .ok()
            .map(|bpe| Self { bpe })
    }

    /// Shared generic encoder for embedding/moderation-style models.
    fn fallback() -> Option<Self> {
        tiktoken_rs::cl100k_base().ok().map(|bpe| Self { bpe })
    }

    /// Number of tokens in a piece of text.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Number of tokens a message sequence consumes, including per-message
    /// framing overhead.
    pub fn count_messages(&self, messages: &[PromptMessage]) -> usize {
        let mut total = TOKENS_PER_REPLY;
        for message in messages {
            total += TOKENS_PER_MESSAGE + self.count(&message.content);
        }
        total
    }
}

/// Pick the token encoder for a model identifier, if one applies.
///
/// Returns `None` when no identifier is given, when the identifier is not in
/// the catalog, or when the model is an image generator (not token-metered
/// on the input side). Chat models get their model-specific encoder;
/// everything else gets the generic fallback.
pub fn select_encoder(model: Option<&str>) -> Option<TokenEncoder> {
    let resolved = ModelId::resolve(model?)?;
    let wire = resolved.wire_name();
    if wire.starts_with("dall-e") {
        return None;
    }
    if wire.starts_with("gpt") {
        // Fall back to the generic encoder if tiktoken has no table for
        // this model yet; chat models stay token-metered either way.
        return TokenEncoder::for_model(wire).or_else(TokenEncoder::fallback);
    }
    TokenEncoder::fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_model_gets_an_encoder() {
        let encoder = select_encoder(Some("Gpt4Omni")).expect("gpt-4o is token-metered");
        assert!(encoder.count("hello world") > 0);
    }

    #[test]
    fn test_image_model_gets_none() {
        assert!(select_encoder(Some("DallE3")).is_none());
    }

    #[test]
    fn test_embedding_model_gets_fallback() {
        let encoder = select_encoder(Some("TextEmbeddingAda002")).expect("fallback encoder");
        assert!(encoder.count("hello world") > 0);
    }

    #[test]
    fn test_absent_or_unknown_model_gets_none() {
        assert!(select_encoder(None).is_none());
        assert!(select_encoder(Some("not-a-real-model")).is_none());
        assert!(select_encoder(Some("")).is_none());
    }

    #[test]
    fn test_selection_is_total_and_deterministic() {
        for model in ModelId::all() {
            let a = select_encoder(Some(model.name())).map(|e| e.count("determinism check"));
            let b = select_encoder(Some(model.name())).map(|e| e.count("determinism check"));
            assert_eq!(a, b, "unstable count for {}", model.name());
            let expect_none = model.wire_name().starts_with("dall-e");
            assert_eq!(a.is_none(), expect_none, "wrong selection for {}", model.name());
        }
    }

    #[test]
    fn test_message_count_grows_with_content() {
        let encoder = select_encoder(Some("Gpt35Turbo")).unwrap();
        let short = vec![PromptMessage::user("hi")];
        let long = vec![
            PromptMessage::system("You are a careful summarizer."),
            PromptMessage::user("Summarize the attached quarterly report in three bullets."),
        ];
        assert!(encoder.count_messages(&long) > encoder.count_messages(&short));
    }
}
