//! tether-platform — platform detection and debug-adapter executable
//! resolution.
//!
//! Picks the concrete program/runtime/arguments for the current OS from a
//! contribution's per-platform metadata. Platform branching is kept out
//! of the resolver itself: detection happens once, and resolution is a
//! pure function of (platform, metadata, plugin path).

pub mod resolve;
pub mod system;

pub use resolve::{resolve_executable, resolve_platform, PlatformKey};
pub use system::{windows_x86_on_x64_marker, OsKind};
