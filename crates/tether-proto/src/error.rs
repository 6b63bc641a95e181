//! Cross-boundary error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced across the bridge boundary.
///
/// Serializable so a remote-call transport can carry a rejection back to
/// the caller; process-local causes (spawn I/O) are stringified at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BridgeError {
    /// The referenced contribution id is not registered.
    #[error("unknown contribution: {id}")]
    ContributionNotFound {
        /// The id that failed to resolve.
        id: String,
    },

    /// The referenced session id is not registered.
    #[error("unknown session: {id}")]
    SessionNotFound {
        /// The id that failed to resolve.
        id: String,
    },

    /// No debug-adapter executable could be determined for the type.
    #[error("no debug adapter executable configured for type: {debug_type}")]
    NotConfigured {
        /// The debug type that has no resolvable executable.
        debug_type: String,
    },

    /// The executable descriptor matches neither known shape.
    #[error("unsupported debug adapter executable: {detail}")]
    UnsupportedExecutable {
        /// What made the descriptor unrecognizable.
        detail: String,
    },

    /// A failure raised by a contribution's own provider, passed through
    /// unmodified.
    #[error("{message}")]
    Provider {
        /// The provider's error message.
        message: String,
    },

    /// The adapter process failed to start.
    #[error("adapter failed to start: {message}")]
    Spawn {
        /// The stringified spawn failure.
        message: String,
    },

    /// The adapter communication channel is closed.
    #[error("adapter channel closed")]
    ChannelClosed,
}

impl BridgeError {
    /// Build a `ContributionNotFound` from any displayable id.
    pub fn contribution_not_found(id: impl ToString) -> Self {
        Self::ContributionNotFound { id: id.to_string() }
    }

    /// Build a `SessionNotFound` from any displayable id.
    pub fn session_not_found(id: impl ToString) -> Self {
        Self::SessionNotFound { id: id.to_string() }
    }

    /// Wrap a provider failure for pass-through.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}
