//! tether-proto — shared wire types for the debug-adapter bridge.
//!
//! Everything that crosses the boundary between the extension side and
//! the host side is defined here: opaque ids, configuration documents,
//! contribution metadata, executable descriptors, wire breakpoints, the
//! cross-boundary error taxonomy, and the two RPC trait surfaces. Only
//! ids and plain data cross the boundary — never live object references.

pub mod breakpoint;
pub mod configuration;
pub mod contribution;
pub mod error;
pub mod executable;
pub mod id;
pub mod rpc;

// Re-export key types for convenience.
pub use breakpoint::{WireBreakpoint, WireSourceLocation};
pub use configuration::{DebugConfiguration, DebuggerDescription, NameOrConfiguration};
pub use contribution::{DebuggerContribution, PlatformRecord};
pub use error::BridgeError;
pub use executable::ExecutableDescriptor;
pub use id::{ContributionId, SessionId};
pub use rpc::{ExtensionRpc, HostRpc};
