//! Error type shared across the copilot contract layer.
//!
//! Callers branch on the variant: a malformed request (`Validation`) is not
//! the same condition as "nobody can do this" (`CapabilityUnavailable`) or a
//! vendor failure (`Provider`).

use thiserror::Error;

use crate::provider::Capability;

/// Errors surfaced by the contract layer.
#[derive(Debug, Error)]
pub enum CopilotError {
    /// Schema mismatch: wrong type, missing required field, unknown field,
    /// or an invalid enum value. Never silently coerced.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No registered provider declares the requested capability.
    #[error("no registered provider offers {0}")]
    CapabilityUnavailable(Capability),

    /// A provider declared a capability it does not implement. Caught at
    /// registration time, before any request reaches the provider.
    #[error("provider misconfigured: {0}")]
    Misconfigured(String),

    /// A vendor or network failure from a concrete provider. Propagated
    /// as-is; retry policy belongs to the adapter or caller.
    #[error("provider '{provider}' failed: {source}")]
    Provider {
        provider: String,
        #[source]
        source: anyhow::Error,
    },

    /// The operation was aborted before it produced any output. A stream
    /// cancelled after yielding simply ends instead.
    #[error("operation cancelled before any output")]
    Cancelled,
}

impl CopilotError {
    /// Wrap a vendor-side failure, keeping the provider tag for diagnostics.
    pub fn provider(provider: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Provider {
            provider: provider.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CopilotError>;
