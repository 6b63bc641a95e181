//! tether-launch — debug-adapter process launching.
//!
//! Turns a resolved executable descriptor into a running subprocess and
//! exposes its standard input/output as a duplex byte channel. The bridge
//! treats adapter traffic as opaque bytes; DAP framing happens elsewhere.

pub mod channel;
pub mod error;
pub mod launcher;

pub use channel::AdapterChannel;
pub use error::LaunchError;
pub use launcher::ProcessLauncher;
