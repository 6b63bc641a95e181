//! tether-host — the host side of the debug-adapter bridge.
//!
//! Holds the contributor-proxy table, forwards host authority events to
//! the extension side, routes extension-originated commands into the
//! host's own managers, and translates breakpoints between the host's
//! internal representation and the wire form.

pub mod authority;
pub mod breakpoint;
pub mod bridge;
pub mod proxy;
pub mod relay;

#[cfg(test)]
pub(crate) mod testing;

pub use authority::{
    BreakpointStore, ConfigurationStore, ContributionManager, DebugConsole, SessionManager,
};
pub use breakpoint::MarkerBreakpoint;
pub use bridge::DebugHostBridge;
pub use proxy::ContributorProxy;
pub use relay::{DebugEventRelay, HostDebugEvent};
