//! Launch error types.

use tether_proto::BridgeError;
use thiserror::Error;

/// Errors from launching or talking to an adapter process.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Adapter process failed to start.
    #[error("adapter failed to start: {0}")]
    Spawn(#[from] std::io::Error),

    /// A standard stream of the spawned process could not be captured.
    #[error("could not capture adapter {0}")]
    Stdio(&'static str),

    /// The descriptor matches neither known shape.
    #[error("unsupported debug adapter executable: {0}")]
    Unsupported(String),

    /// The channel to the adapter is closed.
    #[error("adapter channel closed")]
    ChannelClosed,
}

impl From<LaunchError> for BridgeError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::Spawn(e) => BridgeError::Spawn {
                message: e.to_string(),
            },
            LaunchError::Stdio(stream) => BridgeError::Spawn {
                message: format!("could not capture {stream}"),
            },
            LaunchError::Unsupported(detail) => BridgeError::UnsupportedExecutable { detail },
            LaunchError::ChannelClosed => BridgeError::ChannelClosed,
        }
    }
}
