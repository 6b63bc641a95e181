//! Extension-side table of live debug sessions.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use tether_launch::AdapterChannel;
use tether_proto::{BridgeError, ContributionId, DebugConfiguration, SessionId};

/// Forwards custom DAP requests into a session's adapter and relays the
/// response back. Bound to the session when its channel is attached.
#[async_trait]
pub trait CustomRequestForwarder: Send + Sync {
    /// Forward one request and await its response.
    async fn forward(
        &self,
        command: &str,
        args: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, BridgeError>;
}

/// The external manager of host-visible virtual connections. DAP framing
/// and request correlation live behind this boundary; the bridge hands
/// over opaque byte streams.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    /// Build the custom-request forwarder for a session, bound to the
    /// adapter's input stream.
    fn request_forwarder(
        &self,
        session: SessionId,
        contribution: ContributionId,
        input: mpsc::Sender<Vec<u8>>,
    ) -> Arc<dyn CustomRequestForwarder>;

    /// Ensure a host-visible connection exists for `session` and bind the
    /// adapter's output stream to it. The registry calls this exactly
    /// once per session.
    async fn ensure_connection(
        &self,
        session: SessionId,
        output: mpsc::Receiver<Vec<u8>>,
    ) -> Result<(), BridgeError>;
}

/// Lifecycle state of a session value.
///
/// The create call itself is the first stage; a `Session` value exists
/// only from channel attachment onward and moves strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Channel attached, not yet bound to a host-visible connection.
    Attached,
    /// Bound to its connection; traffic flows.
    Running,
    /// Terminated; the value is about to be dropped.
    Terminated,
}

/// One live debugging conversation bound to a spawned adapter process.
pub struct Session {
    id: SessionId,
    contribution: ContributionId,
    debug_type: String,
    configuration: DebugConfiguration,
    channel: AdapterChannel,
    forwarder: Arc<dyn CustomRequestForwarder>,
    state: SessionState,
}

impl Session {
    /// A session in the `Attached` state.
    pub fn new(
        id: SessionId,
        contribution: ContributionId,
        debug_type: impl Into<String>,
        configuration: DebugConfiguration,
        channel: AdapterChannel,
        forwarder: Arc<dyn CustomRequestForwarder>,
    ) -> Self {
        Self {
            id,
            contribution,
            debug_type: debug_type.into(),
            configuration,
            channel,
            forwarder,
            state: SessionState::Attached,
        }
    }

    /// The session id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The owning contribution's id.
    pub fn contribution(&self) -> ContributionId {
        self.contribution
    }

    /// The debug type of the session.
    pub fn debug_type(&self) -> &str {
        &self.debug_type
    }

    /// The configuration the session was created with.
    pub fn configuration(&self) -> &DebugConfiguration {
        &self.configuration
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Transition: Attached → Running. Returns `false` when the session
    /// is not in the `Attached` state; the transition happens once.
    pub fn mark_running(&mut self) -> bool {
        if self.state != SessionState::Attached {
            return false;
        }
        self.state = SessionState::Running;
        true
    }

    /// The session's custom-request forwarder.
    pub fn forwarder(&self) -> Arc<dyn CustomRequestForwarder> {
        self.forwarder.clone()
    }

    /// Terminate the session: mark it and release the channel, killing
    /// the adapter process. Callers must have removed the session from
    /// the registry first.
    pub async fn shutdown(&mut self) {
        self.state = SessionState::Terminated;
        self.channel.dispose().await;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("debug_type", &self.debug_type)
            .field("state", &self.state)
            .finish()
    }
}

/// Maps session ids to live sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under its own id.
    pub fn insert(&mut self, session: Session) {
        self.sessions.insert(session.id(), session);
    }

    /// Remove a session, handing ownership to the caller for teardown.
    pub fn remove(&mut self, id: &SessionId) -> Option<Session> {
        self.sessions.remove(id)
    }

    /// Look up a session.
    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// Whether a session id is live.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The forwarder of a live session, cloned out so the caller can
    /// await on it without holding the registry.
    pub fn forwarder(&self, id: &SessionId) -> Option<Arc<dyn CustomRequestForwarder>> {
        self.sessions.get(id).map(|s| s.forwarder())
    }
}
