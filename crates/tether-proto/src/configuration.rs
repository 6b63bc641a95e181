//! Debug configuration documents and the registration description.

use serde::{Deserialize, Serialize};

/// Lightweight description announced to the host side when a contribution
/// registers. Only one description is advertised per registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebuggerDescription {
    /// The debug type this contribution handles (e.g. "node").
    #[serde(rename = "type")]
    pub debug_type: String,
    /// Human-readable label shown by the host UI.
    pub label: String,
}

/// A launch/attach configuration document.
///
/// The bridge interprets only `type` and `name`; every other key passes
/// through untouched in `rest`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DebugConfiguration {
    /// The debug type the configuration targets.
    #[serde(rename = "type")]
    pub debug_type: String,
    /// Display name of the configuration.
    pub name: String,
    /// Launch request kind ("launch" or "attach"), when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    /// All remaining keys, passed through opaquely.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl DebugConfiguration {
    /// Create a configuration with just a type and name.
    pub fn new(debug_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            debug_type: debug_type.into(),
            name: name.into(),
            request: None,
            rest: serde_json::Map::new(),
        }
    }

    /// Set the request kind.
    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.request = Some(request.into());
        self
    }
}

/// Argument of `start_debugging`: either the name of a stored
/// configuration or a full configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameOrConfiguration {
    /// A full configuration document.
    Configuration(DebugConfiguration),
    /// The name of a configuration known to the host's configuration store.
    Name(String),
}
