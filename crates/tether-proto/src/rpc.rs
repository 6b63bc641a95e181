//! The two remote-call surfaces of the bridge.
//!
//! Each side implements one trait and holds a proxy to the other. Every
//! operation is an asynchronous request/response pair over an ordered
//! channel per direction; operations returning `()` without a `Result`
//! are fire-and-forget notifications. Only ids and plain data cross.

use async_trait::async_trait;

use crate::breakpoint::WireBreakpoint;
use crate::configuration::{DebugConfiguration, DebuggerDescription, NameOrConfiguration};
use crate::error::BridgeError;
use crate::id::{ContributionId, SessionId};

/// Extension-side entry points, invoked by the host side.
#[async_trait]
pub trait ExtensionRpc: Send + Sync {
    /// Create a debug session for a registered contribution. Resolves and
    /// launches the adapter executable and returns the fresh session id.
    async fn create_debug_session(
        &self,
        contribution: ContributionId,
        configuration: DebugConfiguration,
    ) -> Result<SessionId, BridgeError>;

    /// Terminate a session. A no-op for unknown ids.
    async fn terminate_debug_session(&self, session: SessionId);

    /// Languages supported by a contribution. Empty when the contribution
    /// is unknown or declares none.
    async fn get_supported_languages(&self, contribution: ContributionId) -> Vec<String>;

    /// JSON-schema attribute documents for a contribution's
    /// configurations. Empty when the contribution is unknown or
    /// declares none.
    async fn get_schema_attributes(
        &self,
        contribution: ContributionId,
    ) -> Vec<serde_json::Value>;

    /// Configuration snippets for a contribution. Empty when the
    /// contribution is unknown or declares none.
    async fn get_configuration_snippets(
        &self,
        contribution: ContributionId,
    ) -> Vec<serde_json::Value>;

    /// Initial configurations offered by a contribution's provider.
    async fn provide_debug_configurations(
        &self,
        contribution: ContributionId,
        folder: Option<String>,
    ) -> Vec<DebugConfiguration>;

    /// Let the contribution's provider fill in a configuration. `None`
    /// when the contribution is unknown or does not resolve.
    async fn resolve_debug_configuration(
        &self,
        contribution: ContributionId,
        configuration: DebugConfiguration,
        folder: Option<String>,
    ) -> Option<DebugConfiguration>;

    /// A custom DAP event was emitted by a session. Fire-and-forget.
    async fn on_session_custom_event(
        &self,
        session: SessionId,
        event: String,
        body: Option<serde_json::Value>,
    );

    /// The host created a session object. Fire-and-forget.
    async fn session_did_create(&self, session: SessionId);

    /// The host destroyed a session object. Fire-and-forget.
    async fn session_did_destroy(&self, session: SessionId);

    /// The host's active session changed. Fire-and-forget.
    async fn session_did_change(&self, session: Option<SessionId>);

    /// The host's breakpoint set changed. Carries the full snapshot plus
    /// the delta restricted to the affected resource. Fire-and-forget.
    async fn breakpoints_did_change(
        &self,
        all: Vec<WireBreakpoint>,
        added: Vec<WireBreakpoint>,
        removed: Vec<WireBreakpoint>,
        changed: Vec<WireBreakpoint>,
    );
}

/// Host-side entry points, invoked by the extension side.
#[async_trait]
pub trait HostRpc: Send + Sync {
    /// Append text to the debug console. Fire-and-forget.
    async fn append_to_debug_console(&self, text: String);

    /// Append a line to the debug console. Fire-and-forget.
    async fn append_line_to_debug_console(&self, text: String);

    /// A contribution registered on the extension side; the host should
    /// build its proxy and advertise the described debugger.
    async fn register_debug_configuration_provider(
        &self,
        contribution: ContributionId,
        description: DebuggerDescription,
    );

    /// A contribution unregistered; the host should drop its proxy.
    async fn unregister_debug_configuration_provider(&self, contribution: ContributionId);

    /// Add breakpoints to the host's marker store. Fire-and-forget.
    async fn add_breakpoints(&self, breakpoints: Vec<WireBreakpoint>);

    /// Remove breakpoints from the host's marker store. Fire-and-forget.
    async fn remove_breakpoints(&self, breakpoints: Vec<WireBreakpoint>);

    /// Send a custom DAP request through the host's session manager.
    /// Fails with `SessionNotFound` for unknown ids.
    async fn custom_request(
        &self,
        session: SessionId,
        command: String,
        args: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, BridgeError>;

    /// Start debugging a named or inline configuration. Returns `false`
    /// (not an error) when a named configuration cannot be found.
    async fn start_debugging(
        &self,
        folder: Option<String>,
        what: NameOrConfiguration,
    ) -> Result<bool, BridgeError>;
}
