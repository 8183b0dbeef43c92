//! Chat history records and live session state.
//!
//! A `ChatSessionState` is owned exclusively by the session context that
//! created it; concurrent sessions are fully independent. `ChatHistory` is
//! the denormalized, read-optimized projection handed back by the history
//! query surface. How records are stored is an external concern, but any
//! store must preserve the offset pagination of [`filter_histories`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CopilotError, Result};
use crate::message::{ChatMessage, PromptMessage, Role, SubmittedMessage};

/// One element of a history record: either a bare prompt message or a
/// message already committed with its timestamp. A single record may mix
/// both at arbitrary positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryMessage {
    Chat(ChatMessage),
    Prompt(PromptMessage),
}

impl HistoryMessage {
    pub fn role(&self) -> Role {
        match self {
            Self::Chat(m) => m.role,
            Self::Prompt(m) => m.role,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Chat(m) => &m.content,
            Self::Prompt(m) => &m.content,
        }
    }
}

/// A retrievable snapshot of one recorded exchange.
///
/// `tokens` is the count attributable to this record, not a running session
/// total. `messages` preserves chronological insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ChatHistory {
    pub session_id: String,
    /// Labels the kind of interaction, e.g. a feature name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub tokens: u64,
    pub messages: Vec<HistoryMessage>,
    pub created_at: DateTime<Utc>,
}

impl ChatHistory {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| CopilotError::Validation(e.to_string()))
    }
}

/// Optional filters for the history listing operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHistoriesOptions {
    pub action: Option<String>,
    pub session_id: Option<String>,
    pub limit: Option<usize>,
    pub skip: Option<usize>,
}

/// Apply listing filters and offset pagination to a set of history records.
///
/// Records are ordered by `created_at` ascending before `skip`/`limit` are
/// applied, so pages are stable for a fixed input set.
pub fn filter_histories(
    histories: &[ChatHistory],
    options: &ListHistoriesOptions,
) -> Vec<ChatHistory> {
    let mut matched: Vec<ChatHistory> = histories
        .iter()
        .filter(|h| {
            options
                .action
                .as_ref()
                .map_or(true, |a| h.action.as_deref() == Some(a.as_str()))
        })
        .filter(|h| options.session_id.as_ref().map_or(true, |s| &h.session_id == s))
        .cloned()
        .collect();
    matched.sort_by_key(|h| h.created_at);

    let skip = options.skip.unwrap_or(0);
    let limit = options.limit.unwrap_or(usize::MAX);
    let page: Vec<ChatHistory> = matched.into_iter().skip(skip).take(limit).collect();
    tracing::debug!(
        returned = page.len(),
        session_id = options.session_id.as_deref(),
        action = options.action.as_deref(),
        "listed chat histories"
    );
    page
}

/// Identity of the prompt template a session is bound to. The template
/// itself (text, rendering) lives outside this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRef {
    pub name: String,
    /// Catalog identifier of the model this prompt targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl PromptRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Live, in-memory state of an active session.
///
/// Created when a session is opened; mutated only by appending validated
/// messages. Eviction policy belongs to the owning session manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionState {
    pub session_id: String,
    pub user_id: String,
    pub workspace_id: String,
    pub doc_id: String,
    pub prompt: PromptRef,
    pub messages: Vec<ChatMessage>,
}

impl ChatSessionState {
    /// Open a fresh session with a generated id.
    pub fn new(
        user_id: impl Into<String>,
        workspace_id: impl Into<String>,
        doc_id: impl Into<String>,
        prompt: PromptRef,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            workspace_id: workspace_id.into(),
            doc_id: doc_id.into(),
            prompt,
            messages: Vec::new(),
        }
    }

    /// Append a caller submission. The session assigns `Role::User` and the
    /// commit timestamp; the caller never picks a role.
    pub fn push(&mut self, submitted: SubmittedMessage) -> Result<&ChatMessage> {
        if submitted.session_id != self.session_id {
            return Err(CopilotError::Validation(format!(
                "submission for session '{}' pushed to session '{}'",
                submitted.session_id, self.session_id
            )));
        }
        let has_attachments = submitted.attachments.as_ref().is_some_and(|a| !a.is_empty());
        if submitted.content.is_none() && !has_attachments {
            return Err(CopilotError::Validation(
                "submission carries neither content nor attachments".into(),
            ));
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            content: submitted.content.unwrap_or_default(),
            attachments: submitted.attachments,
            params: submitted.params,
            created_at: Utc::now(),
        });
        Ok(self.messages.last().unwrap())
    }

    /// Commit a generated reply to the session.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.messages
            .push(ChatMessage::commit(PromptMessage::assistant(content)));
        self.messages.last().unwrap()
    }

    /// Content of the most recent user turn, used when re-prompting.
    pub fn latest_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}
