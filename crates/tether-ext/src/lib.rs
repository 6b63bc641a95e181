//! tether-ext — the extension side of the debug-adapter bridge.
//!
//! Hosts pluggable debug-adapter contributions: the contribution registry
//! dispatches capability calls routed from the host side, and the session
//! registry orchestrates create → attach-channel → run → terminate for
//! out-of-process adapters. All host-side state is reached through the
//! `HostRpc` proxy; nothing but ids and plain data crosses the boundary.

pub mod contributions;
pub mod extension;
pub mod provider;
pub mod sessions;

pub use contributions::{ContributionEntry, ContributionRegistry};
pub use extension::{DebugExtEvent, DebugExtension, Registration};
pub use provider::{AdapterProvider, ProviderCapabilities};
pub use sessions::{ConnectionManager, CustomRequestForwarder, Session, SessionRegistry, SessionState};
