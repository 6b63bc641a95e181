//! tether — a debug-adapter bridge between an extension host and a UI
//! host.
//!
//! The two sides share no memory and exchange only ids and plain data
//! over an asynchronous remote-call channel. The extension side
//! ([`DebugExtension`]) hosts pluggable debug-adapter contributions,
//! resolves and spawns adapter processes, and owns the live session
//! table; the host side ([`DebugHostBridge`]) keeps contributor proxies
//! for the UI's contribution manager and relays authority events back.
//!
//! This crate is the facade: it re-exports the member crates and adds
//! the embedder-facing configuration and logging setup.

pub mod config;
pub mod logging;

pub use config::{BridgeConfig, ConfigError, LogConfig, LogLevel};

pub use tether_ext::{
    AdapterProvider, ConnectionManager, ContributionRegistry, CustomRequestForwarder,
    DebugExtEvent, DebugExtension, ProviderCapabilities, Registration, Session, SessionRegistry,
    SessionState,
};
pub use tether_host::{
    BreakpointStore, ConfigurationStore, ContributionManager, ContributorProxy, DebugConsole,
    DebugEventRelay, DebugHostBridge, HostDebugEvent, MarkerBreakpoint, SessionManager,
};
pub use tether_launch::{AdapterChannel, LaunchError, ProcessLauncher};
pub use tether_platform::{resolve_executable, resolve_platform, OsKind, PlatformKey};
pub use tether_proto::{
    BridgeError, ContributionId, DebugConfiguration, DebuggerContribution, DebuggerDescription,
    ExecutableDescriptor, ExtensionRpc, HostRpc, NameOrConfiguration, SessionId, WireBreakpoint,
    WireSourceLocation,
};
