//! Relays host-authority events to the extension side.

use std::sync::Arc;

use tokio::sync::mpsc;

use tether_proto::{ExtensionRpc, SessionId, WireBreakpoint};

use crate::breakpoint::MarkerBreakpoint;

/// One event emitted by a host authority.
#[derive(Debug, Clone)]
pub enum HostDebugEvent {
    /// A session object was created.
    SessionCreated(SessionId),
    /// A session object was destroyed.
    SessionDestroyed(SessionId),
    /// The active session changed.
    ActiveSessionChanged(Option<SessionId>),
    /// A session emitted a custom DAP event.
    SessionCustomEvent {
        /// The emitting session.
        session: SessionId,
        /// DAP event name.
        event: String,
        /// Event body, when present.
        body: Option<serde_json::Value>,
    },
    /// One marker-change batch: the full current breakpoint set plus the
    /// delta restricted to the affected resource.
    BreakpointsChanged {
        /// Full current snapshot.
        all: Vec<MarkerBreakpoint>,
        /// Added in this batch.
        added: Vec<MarkerBreakpoint>,
        /// Removed in this batch.
        removed: Vec<MarkerBreakpoint>,
        /// Changed in this batch.
        changed: Vec<MarkerBreakpoint>,
    },
}

/// Forwards host events over the boundary, one outbound call per event.
pub struct DebugEventRelay {
    extension: Arc<dyn ExtensionRpc>,
}

impl DebugEventRelay {
    /// A relay calling into the given extension side.
    pub fn new(extension: Arc<dyn ExtensionRpc>) -> Self {
        Self { extension }
    }

    /// Forward one event. Breakpoint batches are forwarded as-is; the
    /// relay does not compute a finer per-item diff.
    pub async fn relay(&self, event: HostDebugEvent) {
        match event {
            HostDebugEvent::SessionCreated(session) => {
                self.extension.session_did_create(session).await;
            }
            HostDebugEvent::SessionDestroyed(session) => {
                self.extension.session_did_destroy(session).await;
            }
            HostDebugEvent::ActiveSessionChanged(session) => {
                self.extension.session_did_change(session).await;
            }
            HostDebugEvent::SessionCustomEvent {
                session,
                event,
                body,
            } => {
                self.extension
                    .on_session_custom_event(session, event, body)
                    .await;
            }
            HostDebugEvent::BreakpointsChanged {
                all,
                added,
                removed,
                changed,
            } => {
                self.extension
                    .breakpoints_did_change(
                        to_wire(&all),
                        to_wire(&added),
                        to_wire(&removed),
                        to_wire(&changed),
                    )
                    .await;
            }
        }
    }

    /// Drain a host authority's event stream until it closes.
    pub async fn run(&self, mut events: mpsc::Receiver<HostDebugEvent>) {
        while let Some(event) = events.recv().await {
            self.relay(event).await;
        }
        tracing::debug!("host event stream closed");
    }
}

fn to_wire(markers: &[MarkerBreakpoint]) -> Vec<WireBreakpoint> {
    markers.iter().map(MarkerBreakpoint::to_wire).collect()
}
