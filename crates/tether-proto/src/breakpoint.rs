//! Wire form of breakpoints exchanged over the bridge.
//!
//! Ephemeral: created from the host's marker store on every state-change
//! notification, never persisted by the bridge.

use serde::{Deserialize, Serialize};

/// Source location of a wire breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSourceLocation {
    /// Resource identifier (uri) of the source.
    pub uri: String,
    /// Line number.
    pub line: u64,
    /// Column number.
    pub column: u64,
}

/// A breakpoint in wire form.
///
/// The location is optional; a breakpoint without one is excluded when
/// translating to the host's internal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBreakpoint {
    /// Whether the breakpoint is enabled.
    pub enabled: bool,
    /// Optional condition expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Optional hit-count condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_condition: Option<String>,
    /// Optional log message (logpoint).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_message: Option<String>,
    /// Where the breakpoint sits, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<WireSourceLocation>,
}

impl WireBreakpoint {
    /// Create an enabled breakpoint at the given location.
    pub fn at(uri: impl Into<String>, line: u64, column: u64) -> Self {
        Self {
            enabled: true,
            condition: None,
            hit_condition: None,
            log_message: None,
            location: Some(WireSourceLocation {
                uri: uri.into(),
                line,
                column,
            }),
        }
    }

    /// Set a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_builder_sets_location() {
        let bp = WireBreakpoint::at("file:///a.rs", 5, 0).with_condition("x > 1");
        let location = bp.location.as_ref().unwrap();
        assert_eq!(location.uri, "file:///a.rs");
        assert_eq!(location.line, 5);
        assert_eq!(bp.condition.as_deref(), Some("x > 1"));
        assert!(bp.enabled);
    }

    #[test]
    fn breakpoint_serializes_camel_case() {
        let mut bp = WireBreakpoint::at("file:///a.rs", 1, 0);
        bp.hit_condition = Some("== 3".into());
        bp.log_message = Some("hit {x}".into());
        let json = serde_json::to_value(&bp).unwrap();
        assert_eq!(json["hitCondition"], "== 3");
        assert_eq!(json["logMessage"], "hit {x}");
        assert!(json.get("hit_condition").is_none());
    }

    #[test]
    fn breakpoint_without_location_parses() {
        let bp: WireBreakpoint =
            serde_json::from_value(serde_json::json!({"enabled": false})).unwrap();
        assert!(!bp.enabled);
        assert!(bp.location.is_none());
    }

    #[test]
    fn breakpoint_round_trips() {
        let bp = WireBreakpoint::at("file:///b.rs", 12, 4).with_condition("n == 0");
        let json = serde_json::to_string(&bp).unwrap();
        let back: WireBreakpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(bp, back);
    }
}
