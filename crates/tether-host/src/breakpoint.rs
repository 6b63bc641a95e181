//! Translation between the host's internal breakpoint representation and
//! the wire form exchanged over the bridge.

use tether_proto::{WireBreakpoint, WireSourceLocation};

/// A breakpoint as the host's marker store holds it. Unlike the wire
/// form, the location is always known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBreakpoint {
    /// Resource identifier of the source.
    pub uri: String,
    /// Line number.
    pub line: u64,
    /// Column number.
    pub column: u64,
    /// Whether the breakpoint is enabled.
    pub enabled: bool,
    /// Optional condition expression.
    pub condition: Option<String>,
    /// Optional hit-count condition.
    pub hit_condition: Option<String>,
    /// Optional log message (logpoint).
    pub log_message: Option<String>,
}

impl MarkerBreakpoint {
    /// An enabled marker at the given location.
    pub fn new(uri: impl Into<String>, line: u64, column: u64) -> Self {
        Self {
            uri: uri.into(),
            line,
            column,
            enabled: true,
            condition: None,
            hit_condition: None,
            log_message: None,
        }
    }

    /// Set a condition expression.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Set a hit-count condition.
    pub fn with_hit_condition(mut self, hit_condition: impl Into<String>) -> Self {
        self.hit_condition = Some(hit_condition.into());
        self
    }

    /// Set a log message.
    pub fn with_log_message(mut self, log_message: impl Into<String>) -> Self {
        self.log_message = Some(log_message.into());
        self
    }

    /// Convert to the wire form. Total: the marker always has a location.
    pub fn to_wire(&self) -> WireBreakpoint {
        WireBreakpoint {
            enabled: self.enabled,
            condition: self.condition.clone(),
            hit_condition: self.hit_condition.clone(),
            log_message: self.log_message.clone(),
            location: Some(WireSourceLocation {
                uri: self.uri.clone(),
                line: self.line,
                column: self.column,
            }),
        }
    }

    /// Convert from the wire form. A breakpoint without a location is
    /// excluded from translation and yields `None`.
    pub fn from_wire(wire: &WireBreakpoint) -> Option<Self> {
        let location = wire.location.as_ref()?;
        Some(Self {
            uri: location.uri.clone(),
            line: location.line,
            column: location.column,
            enabled: wire.enabled,
            condition: wire.condition.clone(),
            hit_condition: wire.hit_condition.clone(),
            log_message: wire.log_message.clone(),
        })
    }
}
