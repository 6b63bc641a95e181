//! Package metadata describing a contributed debugger.
//!
//! Mirrors the `debuggers` section of a plugin manifest: the unqualified
//! program/runtime fields, their per-platform overrides, and the
//! declarative capability data (languages, schema attributes, snippets).

use serde::{Deserialize, Serialize};

/// Per-platform executable fields. Any field left out falls back to the
/// contribution's unqualified value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRecord {
    /// Adapter program path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Arguments passed to the program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Runtime used to execute the program (e.g. "node").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Arguments passed to the runtime, before the program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_args: Option<Vec<String>>,
}

/// Metadata for one contributed debugger, as declared in the plugin
/// package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebuggerContribution {
    /// The debug type (e.g. "node", "gdb").
    #[serde(rename = "type")]
    pub debug_type: String,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Unqualified adapter program path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Unqualified program arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Unqualified runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Unqualified runtime arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_args: Option<Vec<String>>,
    /// Windows override (64-bit process).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<PlatformRecord>,
    /// Windows override for a 32-bit process on a 64-bit OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winx86: Option<PlatformRecord>,
    /// macOS override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osx: Option<PlatformRecord>,
    /// Linux override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<PlatformRecord>,
    /// Languages this debugger supports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// JSON-schema attributes keyed by request kind ("launch", "attach").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_attributes: Option<serde_json::Map<String, serde_json::Value>>,
    /// Configuration snippets offered by the host UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_snippets: Option<Vec<serde_json::Value>>,
}

impl DebuggerContribution {
    /// Create metadata with just a debug type.
    pub fn new(debug_type: impl Into<String>) -> Self {
        Self {
            debug_type: debug_type.into(),
            ..Self::default()
        }
    }
}
