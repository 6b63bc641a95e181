//! Interfaces to the host's own debugging authorities.
//!
//! The bridge calls into these but does not reimplement them: the
//! session manager, breakpoint marker store, configuration manager,
//! contribution manager, and debug console all live outside this crate.

use std::sync::Arc;

use async_trait::async_trait;

use tether_proto::{BridgeError, DebugConfiguration, SessionId};

use crate::breakpoint::MarkerBreakpoint;
use crate::proxy::ContributorProxy;

/// The host's authoritative session manager.
#[async_trait]
pub trait SessionManager: Send + Sync {
    /// Send a custom DAP request through the session's connection.
    /// Fails with `SessionNotFound` for unknown ids.
    async fn custom_request(
        &self,
        session: SessionId,
        command: &str,
        args: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, BridgeError>;

    /// Start debugging a resolved configuration. Returns whether a
    /// session was started.
    async fn start(
        &self,
        folder: Option<&str>,
        configuration: DebugConfiguration,
    ) -> Result<bool, BridgeError>;
}

/// The host's breakpoint marker store.
pub trait BreakpointStore: Send + Sync {
    /// Add markers.
    fn add(&self, breakpoints: Vec<MarkerBreakpoint>);

    /// Remove markers.
    fn remove(&self, breakpoints: Vec<MarkerBreakpoint>);
}

/// The host's launch-configuration manager.
pub trait ConfigurationStore: Send + Sync {
    /// Find a configuration by name, optionally scoped to a folder.
    fn find(&self, folder: Option<&str>, name: &str) -> Option<DebugConfiguration>;
}

/// The host's debugger contribution manager, keyed by debug type.
pub trait ContributionManager: Send + Sync {
    /// Advertise a contributed debugger under its debug type.
    fn register(&self, debug_type: &str, proxy: Arc<ContributorProxy>);

    /// Withdraw a contributed debugger.
    fn unregister(&self, debug_type: &str);
}

/// The host's debug console.
pub trait DebugConsole: Send + Sync {
    /// Append text.
    fn append(&self, text: &str);

    /// Append a full line.
    fn append_line(&self, text: &str);
}
