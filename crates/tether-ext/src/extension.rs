//! The extension-side bridge service.
//!
//! Implements the remote entry points invoked by the host side, owns the
//! two id-keyed registries, and mirrors host state (active session,
//! breakpoints) for plugin code running in this process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex};

use tether_launch::ProcessLauncher;
use tether_platform::{resolve_executable, resolve_platform, windows_x86_on_x64_marker, OsKind, PlatformKey};
use tether_proto::{
    BridgeError, ContributionId, DebugConfiguration, DebuggerContribution, DebuggerDescription,
    ExecutableDescriptor, ExtensionRpc, HostRpc, SessionId, WireBreakpoint,
};

use crate::contributions::{ContributionEntry, ContributionRegistry};
use crate::provider::{AdapterProvider, ProviderCapabilities};
use crate::sessions::{ConnectionManager, Session, SessionRegistry};

/// Buffered events per subscriber before lagging.
const EVENT_CAPACITY: usize = 64;

/// Host state mirrored to plugin code in this process.
#[derive(Debug, Clone)]
pub enum DebugExtEvent {
    /// The host created a session object.
    SessionCreated(SessionId),
    /// The host destroyed a session object.
    SessionDestroyed(SessionId),
    /// The host's active session changed.
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
    /// The host's breakpoint set changed.
    BreakpointsChanged {
        /// Full current snapshot.
        all: Vec<WireBreakpoint>,
        /// Added in this batch.
        added: Vec<WireBreakpoint>,
        /// Removed in this batch.
        removed: Vec<WireBreakpoint>,
        /// Changed in this batch.
        changed: Vec<WireBreakpoint>,
    },
}

/// Handle returned by registration; disposing it removes the entry and
/// notifies the host side.
pub struct Registration {
    id: ContributionId,
    extension: Arc<DebugExtension>,
}

impl Registration {
    /// The registered contribution's id.
    pub fn id(&self) -> ContributionId {
        self.id
    }

    /// Remove the contribution and notify the host.
    pub async fn dispose(self) {
        self.extension.unregister_contribution(self.id).await;
    }
}

/// The extension side of the bridge.
pub struct DebugExtension {
    contributions: Mutex<ContributionRegistry>,
    sessions: Mutex<SessionRegistry>,
    host: Arc<dyn HostRpc>,
    launcher: ProcessLauncher,
    connections: Arc<dyn ConnectionManager>,
    platform: Option<PlatformKey>,
    active_session: Mutex<Option<SessionId>>,
    breakpoints: Mutex<Vec<WireBreakpoint>>,
    events: broadcast::Sender<DebugExtEvent>,
}

impl DebugExtension {
    /// Create the extension side for the detected platform.
    pub fn new(
        host: Arc<dyn HostRpc>,
        launcher: ProcessLauncher,
        connections: Arc<dyn ConnectionManager>,
    ) -> Self {
        let platform = resolve_platform(OsKind::detect(), windows_x86_on_x64_marker());
        Self::with_platform(host, launcher, connections, platform)
    }

    /// Create the extension side with an explicit platform key.
    pub fn with_platform(
        host: Arc<dyn HostRpc>,
        launcher: ProcessLauncher,
        connections: Arc<dyn ConnectionManager>,
        platform: Option<PlatformKey>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            contributions: Mutex::new(ContributionRegistry::new()),
            sessions: Mutex::new(SessionRegistry::new()),
            host,
            launcher,
            connections,
            platform,
            active_session: Mutex::new(None),
            breakpoints: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Register a debug-adapter contribution and announce it to the host.
    /// Never fails; the returned [`Registration`] undoes it.
    pub async fn register_contribution(
        extension: &Arc<Self>,
        debug_type: impl Into<String>,
        provider: Arc<dyn AdapterProvider>,
        capabilities: ProviderCapabilities,
        metadata: DebuggerContribution,
        plugin_path: impl Into<PathBuf>,
    ) -> (ContributionId, Registration) {
        let debug_type = debug_type.into();
        let entry = ContributionEntry {
            debug_type: debug_type.clone(),
            provider,
            capabilities,
            metadata,
            plugin_path: plugin_path.into(),
        };
        let (id, description) = {
            let mut contributions = extension.contributions.lock().await;
            let id = contributions.register(entry);
            let description =
                contributions
                    .description(&id)
                    .unwrap_or_else(|| DebuggerDescription {
                        debug_type: debug_type.clone(),
                        label: debug_type.clone(),
                    });
            (id, description)
        };
        tracing::info!(contribution = %id, %debug_type, "debug contribution registered");
        extension
            .host
            .register_debug_configuration_provider(id, description)
            .await;
        (
            id,
            Registration {
                id,
                extension: extension.clone(),
            },
        )
    }

    /// Remove a contribution and notify the host side.
    pub async fn unregister_contribution(&self, id: ContributionId) {
        let removed = self.contributions.lock().await.remove(&id);
        if removed {
            tracing::info!(contribution = %id, "debug contribution unregistered");
            self.host.unregister_debug_configuration_provider(id).await;
        }
    }

    /// Forward a custom DAP request to a live session's adapter.
    /// Fails with `SessionNotFound` for unknown ids.
    pub async fn custom_request(
        &self,
        session: SessionId,
        command: &str,
        args: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, BridgeError> {
        let forwarder = self
            .sessions
            .lock()
            .await
            .forwarder(&session)
            .ok_or_else(|| BridgeError::session_not_found(session))?;
        forwarder.forward(command, args).await
    }

    /// Append text to the host's debug console.
    pub async fn append_to_console(&self, text: impl Into<String>) {
        self.host.append_to_debug_console(text.into()).await;
    }

    /// Append a line to the host's debug console.
    pub async fn append_line_to_console(&self, text: impl Into<String>) {
        self.host.append_line_to_debug_console(text.into()).await;
    }

    /// The mirrored active-session pointer.
    pub async fn active_session(&self) -> Option<SessionId> {
        *self.active_session.lock().await
    }

    /// The mirrored breakpoint snapshot.
    pub async fn breakpoints(&self) -> Vec<WireBreakpoint> {
        self.breakpoints.lock().await.clone()
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Subscribe to mirrored host events.
    pub fn subscribe(&self) -> broadcast::Receiver<DebugExtEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: DebugExtEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Obtain the executable descriptor for a contribution, preferring
    /// the provider's own resolution when declared and falling back to
    /// the registration metadata.
    async fn obtain_descriptor(
        &self,
        provider: &Arc<dyn AdapterProvider>,
        capabilities: ProviderCapabilities,
        metadata: &DebuggerContribution,
        plugin_path: &Path,
        configuration: &DebugConfiguration,
    ) -> Result<ExecutableDescriptor, BridgeError> {
        if capabilities.provide_executable {
            if let Some(raw) = provider.provide_executable(configuration).await? {
                return ExecutableDescriptor::from_value(&raw);
            }
        }
        resolve_executable(metadata, plugin_path, self.platform)
    }
}

#[async_trait]
impl ExtensionRpc for DebugExtension {
    async fn create_debug_session(
        &self,
        contribution: ContributionId,
        configuration: DebugConfiguration,
    ) -> Result<SessionId, BridgeError> {
        let (provider, capabilities, metadata, plugin_path, debug_type) = {
            let contributions = self.contributions.lock().await;
            let entry = contributions
                .get(&contribution)
                .ok_or_else(|| BridgeError::contribution_not_found(contribution))?;
            (
                entry.provider.clone(),
                entry.capabilities,
                entry.metadata.clone(),
                entry.plugin_path.clone(),
                entry.debug_type.clone(),
            )
        };

        let descriptor = self
            .obtain_descriptor(&provider, capabilities, &metadata, &plugin_path, &configuration)
            .await?;
        let mut channel = self.launcher.launch(&descriptor).await?;

        let session_id = SessionId::fresh();
        let input = channel.writer();
        let output = channel.take_output().ok_or(BridgeError::ChannelClosed)?;
        let forwarder = self
            .connections
            .request_forwarder(session_id, contribution, input);

        let session = Session::new(
            session_id,
            contribution,
            debug_type.clone(),
            configuration,
            channel,
            forwarder,
        );
        self.sessions.lock().await.insert(session);

        // Bind the channel to the host-visible connection; on failure the
        // half-created session must not stay resolvable.
        if let Err(e) = self.connections.ensure_connection(session_id, output).await {
            if let Some(mut session) = self.sessions.lock().await.remove(&session_id) {
                session.shutdown().await;
            }
            return Err(e);
        }

        if let Some(session) = self.sessions.lock().await.get_mut(&session_id) {
            if !session.mark_running() {
                tracing::warn!(session = %session_id, "session already running");
            }
        }
        tracing::info!(session = %session_id, %debug_type, "debug session created");
        Ok(session_id)
    }

    async fn terminate_debug_session(&self, session: SessionId) {
        // Remove before teardown so concurrent lookups never observe a
        // session mid-teardown.
        let removed = self.sessions.lock().await.remove(&session);
        match removed {
            Some(mut live) => {
                live.shutdown().await;
                tracing::info!(session = %session, "debug session terminated");
            }
            None => {
                tracing::debug!(session = %session, "terminate for unknown session ignored");
            }
        }
    }

    async fn get_supported_languages(&self, contribution: ContributionId) -> Vec<String> {
        self.contributions
            .lock()
            .await
            .supported_languages(&contribution)
    }

    async fn get_schema_attributes(&self, contribution: ContributionId) -> Vec<serde_json::Value> {
        self.contributions
            .lock()
            .await
            .schema_attributes(&contribution)
    }

    async fn get_configuration_snippets(
        &self,
        contribution: ContributionId,
    ) -> Vec<serde_json::Value> {
        self.contributions
            .lock()
            .await
            .configuration_snippets(&contribution)
    }

    async fn provide_debug_configurations(
        &self,
        contribution: ContributionId,
        folder: Option<String>,
    ) -> Vec<DebugConfiguration> {
        let Some((provider, capabilities)) =
            self.contributions.lock().await.provider(&contribution)
        else {
            return Vec::new();
        };
        if !capabilities.provide_configurations {
            return Vec::new();
        }
        match provider.provide_configurations(folder.as_deref()).await {
            Ok(configurations) => configurations,
            Err(e) => {
                tracing::warn!(contribution = %contribution, "provider failed: {e}");
                Vec::new()
            }
        }
    }

    async fn resolve_debug_configuration(
        &self,
        contribution: ContributionId,
        configuration: DebugConfiguration,
        folder: Option<String>,
    ) -> Option<DebugConfiguration> {
        let (provider, capabilities) = self.contributions.lock().await.provider(&contribution)?;
        if !capabilities.resolve_configuration {
            return None;
        }
        match provider
            .resolve_configuration(configuration, folder.as_deref())
            .await
        {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(contribution = %contribution, "provider failed: {e}");
                None
            }
        }
    }

    async fn on_session_custom_event(
        &self,
        session: SessionId,
        event: String,
        body: Option<serde_json::Value>,
    ) {
        self.emit(DebugExtEvent::SessionCustomEvent {
            session,
            event,
            body,
        });
    }

    async fn session_did_create(&self, session: SessionId) {
        self.emit(DebugExtEvent::SessionCreated(session));
    }

    async fn session_did_destroy(&self, session: SessionId) {
        self.emit(DebugExtEvent::SessionDestroyed(session));
    }

    async fn session_did_change(&self, session: Option<SessionId>) {
        // The pointer must reference a live session or nothing.
        let validated = match session {
            Some(id) => {
                if self.sessions.lock().await.contains(&id) {
                    Some(id)
                } else {
                    tracing::warn!(session = %id, "active-session change for unknown session");
                    None
                }
            }
            None => None,
        };
        *self.active_session.lock().await = validated;
        self.emit(DebugExtEvent::ActiveSessionChanged(validated));
    }

    async fn breakpoints_did_change(
        &self,
        all: Vec<WireBreakpoint>,
        added: Vec<WireBreakpoint>,
        removed: Vec<WireBreakpoint>,
        changed: Vec<WireBreakpoint>,
    ) {
        *self.breakpoints.lock().await = all.clone();
        self.emit(DebugExtEvent::BreakpointsChanged {
            all,
            added,
            removed,
            changed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::CustomRequestForwarder;
    use std::sync::Mutex as StdMutex;
    use tether_proto::NameOrConfiguration;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct RecordingHost {
        registered: StdMutex<Vec<(ContributionId, DebuggerDescription)>>,
        unregistered: StdMutex<Vec<ContributionId>>,
        console: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl HostRpc for RecordingHost {
        async fn append_to_debug_console(&self, text: String) {
            self.console.lock().unwrap().push(text);
        }

        async fn append_line_to_debug_console(&self, text: String) {
            self.console.lock().unwrap().push(format!("{text}\n"));
        }

        async fn register_debug_configuration_provider(
            &self,
            contribution: ContributionId,
            description: DebuggerDescription,
        ) {
            self.registered
                .lock()
                .unwrap()
                .push((contribution, description));
        }

        async fn unregister_debug_configuration_provider(&self, contribution: ContributionId) {
            self.unregistered.lock().unwrap().push(contribution);
        }

        async fn add_breakpoints(&self, _breakpoints: Vec<WireBreakpoint>) {}

        async fn remove_breakpoints(&self, _breakpoints: Vec<WireBreakpoint>) {}

        async fn custom_request(
            &self,
            session: SessionId,
            _command: String,
            _args: Option<serde_json::Value>,
        ) -> Result<serde_json::Value, BridgeError> {
            Err(BridgeError::session_not_found(session))
        }

        async fn start_debugging(
            &self,
            _folder: Option<String>,
            _what: NameOrConfiguration,
        ) -> Result<bool, BridgeError> {
            Ok(false)
        }
    }

    struct RecordingForwarder {
        log: Arc<StdMutex<Vec<String>>>,
    }

    #[async_trait]
    impl CustomRequestForwarder for RecordingForwarder {
        async fn forward(
            &self,
            command: &str,
            _args: Option<serde_json::Value>,
        ) -> Result<serde_json::Value, BridgeError> {
            self.log.lock().unwrap().push(command.to_string());
            Ok(serde_json::json!({"success": true}))
        }
    }

    #[derive(Default)]
    struct RecordingConnections {
        ensured: StdMutex<Vec<SessionId>>,
        forwarded: Arc<StdMutex<Vec<String>>>,
        fail_ensure: bool,
    }

    #[async_trait]
    impl ConnectionManager for RecordingConnections {
        fn request_forwarder(
            &self,
            _session: SessionId,
            _contribution: ContributionId,
            _input: mpsc::Sender<Vec<u8>>,
        ) -> Arc<dyn CustomRequestForwarder> {
            Arc::new(RecordingForwarder {
                log: self.forwarded.clone(),
            })
        }

        async fn ensure_connection(
            &self,
            session: SessionId,
            _output: mpsc::Receiver<Vec<u8>>,
        ) -> Result<(), BridgeError> {
            if self.fail_ensure {
                return Err(BridgeError::ChannelClosed);
            }
            self.ensured.lock().unwrap().push(session);
            Ok(())
        }
    }

    struct ScriptedProvider {
        configurations: Vec<DebugConfiguration>,
        executable: Option<serde_json::Value>,
        executable_error: Option<String>,
    }

    impl ScriptedProvider {
        fn with_executable(executable: serde_json::Value) -> Self {
            Self {
                configurations: Vec::new(),
                executable: Some(executable),
                executable_error: None,
            }
        }
    }

    #[async_trait]
    impl AdapterProvider for ScriptedProvider {
        async fn provide_configurations(
            &self,
            _folder: Option<&str>,
        ) -> Result<Vec<DebugConfiguration>, BridgeError> {
            Ok(self.configurations.clone())
        }

        async fn resolve_configuration(
            &self,
            configuration: DebugConfiguration,
            _folder: Option<&str>,
        ) -> Result<Option<DebugConfiguration>, BridgeError> {
            Ok(Some(configuration.with_request("launch")))
        }

        async fn provide_executable(
            &self,
            _configuration: &DebugConfiguration,
        ) -> Result<Option<serde_json::Value>, BridgeError> {
            if let Some(message) = &self.executable_error {
                return Err(BridgeError::provider(message.clone()));
            }
            Ok(self.executable.clone())
        }
    }

    struct Fixture {
        extension: Arc<DebugExtension>,
        host: Arc<RecordingHost>,
        connections: Arc<RecordingConnections>,
    }

    fn fixture() -> Fixture {
        fixture_with(RecordingConnections::default())
    }

    fn fixture_with(connections: RecordingConnections) -> Fixture {
        let host = Arc::new(RecordingHost::default());
        let connections = Arc::new(connections);
        let extension = Arc::new(DebugExtension::with_platform(
            host.clone(),
            ProcessLauncher::default(),
            connections.clone(),
            Some(PlatformKey::Linux),
        ));
        Fixture {
            extension,
            host,
            connections,
        }
    }

    async fn register_cat_adapter(fixture: &Fixture) -> (ContributionId, Registration) {
        DebugExtension::register_contribution(
            &fixture.extension,
            "node",
            Arc::new(ScriptedProvider::with_executable(
                serde_json::json!({"command": "cat", "args": []}),
            )),
            ProviderCapabilities::all(),
            DebuggerContribution::new("node"),
            "/plugins/node",
        )
        .await
    }

    #[tokio::test]
    async fn register_announces_description_to_host() {
        let fixture = fixture();
        let (id, _registration) = register_cat_adapter(&fixture).await;

        let registered = fixture.host.registered.lock().unwrap();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].0, id);
        assert_eq!(registered[0].1.debug_type, "node");
    }

    #[tokio::test]
    async fn dispose_removes_entry_and_notifies_host() {
        let fixture = fixture();
        let (id, registration) = register_cat_adapter(&fixture).await;

        registration.dispose().await;

        assert_eq!(fixture.host.unregistered.lock().unwrap().as_slice(), &[id]);
        // Capability queries now degrade to empty.
        assert!(fixture.extension.get_supported_languages(id).await.is_empty());
        assert!(fixture
            .extension
            .resolve_debug_configuration(id, DebugConfiguration::new("node", "Launch"), None)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn provide_configurations_round_trip() {
        let fixture = fixture();
        let provider = ScriptedProvider {
            configurations: vec![DebugConfiguration::new("node", "Launch")
                .with_request("launch")],
            executable: None,
            executable_error: None,
        };
        let (id, _registration) = DebugExtension::register_contribution(
            &fixture.extension,
            "node",
            Arc::new(provider),
            ProviderCapabilities::all(),
            DebuggerContribution::new("node"),
            "/plugins/node",
        )
        .await;

        let configurations = fixture
            .extension
            .provide_debug_configurations(id, None)
            .await;
        assert_eq!(configurations.len(), 1);
        assert_eq!(configurations[0].debug_type, "node");
        assert_eq!(configurations[0].name, "Launch");
        assert_eq!(configurations[0].request.as_deref(), Some("launch"));
    }

    #[tokio::test]
    async fn capability_gated_off_returns_empty() {
        let fixture = fixture();
        let provider = ScriptedProvider {
            configurations: vec![DebugConfiguration::new("node", "Launch")],
            executable: None,
            executable_error: None,
        };
        let (id, _registration) = DebugExtension::register_contribution(
            &fixture.extension,
            "node",
            Arc::new(provider),
            // Nothing declared: the provider is never called.
            ProviderCapabilities::default(),
            DebuggerContribution::new("node"),
            "/plugins/node",
        )
        .await;

        assert!(fixture
            .extension
            .provide_debug_configurations(id, None)
            .await
            .is_empty());
        assert!(fixture
            .extension
            .resolve_debug_configuration(id, DebugConfiguration::new("node", "L"), None)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn metadata_queries_flow_from_registration() {
        let fixture = fixture();
        let mut metadata = DebuggerContribution::new("node");
        metadata.languages = Some(vec!["javascript".into()]);
        metadata.configuration_snippets = Some(vec![serde_json::json!({"label": "Node"})]);
        let (id, _registration) = DebugExtension::register_contribution(
            &fixture.extension,
            "node",
            Arc::new(ScriptedProvider::with_executable(serde_json::json!({}))),
            ProviderCapabilities::default(),
            metadata,
            "/plugins/node",
        )
        .await;

        assert_eq!(
            fixture.extension.get_supported_languages(id).await,
            vec!["javascript".to_string()]
        );
        assert_eq!(
            fixture.extension.get_configuration_snippets(id).await.len(),
            1
        );
        // No configurationAttributes declared: empty, not an error.
        assert!(fixture.extension.get_schema_attributes(id).await.is_empty());
    }

    #[tokio::test]
    async fn create_then_terminate_leaves_registry_empty() {
        let fixture = fixture();
        let (id, _registration) = register_cat_adapter(&fixture).await;

        let session = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("node", "Launch"))
            .await
            .unwrap();
        assert_eq!(fixture.extension.session_count().await, 1);
        assert_eq!(
            fixture.connections.ensured.lock().unwrap().as_slice(),
            &[session]
        );

        fixture.extension.terminate_debug_session(session).await;
        assert_eq!(fixture.extension.session_count().await, 0);

        // Terminating again is a no-op.
        fixture.extension.terminate_debug_session(session).await;
        assert_eq!(fixture.extension.session_count().await, 0);
    }

    #[tokio::test]
    async fn create_for_unknown_contribution_is_not_found() {
        let fixture = fixture();
        let err = fixture
            .extension
            .create_debug_session(
                ContributionId::fresh(),
                DebugConfiguration::new("node", "Launch"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::ContributionNotFound { .. }));
    }

    #[tokio::test]
    async fn create_without_any_executable_is_not_configured() {
        let fixture = fixture();
        let (id, _registration) = DebugExtension::register_contribution(
            &fixture.extension,
            "bare",
            Arc::new(ScriptedProvider {
                configurations: Vec::new(),
                executable: None,
                executable_error: None,
            }),
            ProviderCapabilities::all(),
            DebuggerContribution::new("bare"),
            "/plugins/bare",
        )
        .await;

        let err = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("bare", "Launch"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::NotConfigured { .. }));
    }

    #[tokio::test]
    async fn create_with_invalid_descriptor_is_unsupported() {
        let fixture = fixture();
        let (id, _registration) = DebugExtension::register_contribution(
            &fixture.extension,
            "node",
            Arc::new(ScriptedProvider::with_executable(serde_json::json!({}))),
            ProviderCapabilities::all(),
            DebuggerContribution::new("node"),
            "/plugins/node",
        )
        .await;

        let err = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("node", "Launch"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedExecutable { .. }));
        assert_eq!(fixture.extension.session_count().await, 0);
    }

    #[tokio::test]
    async fn create_propagates_provider_error_unmodified() {
        let fixture = fixture();
        let (id, _registration) = DebugExtension::register_contribution(
            &fixture.extension,
            "node",
            Arc::new(ScriptedProvider {
                configurations: Vec::new(),
                executable: None,
                executable_error: Some("config has no program".into()),
            }),
            ProviderCapabilities::all(),
            DebuggerContribution::new("node"),
            "/plugins/node",
        )
        .await;

        let err = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("node", "Launch"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "config has no program");
    }

    #[tokio::test]
    async fn create_rolls_back_when_connection_fails() {
        let fixture = fixture_with(RecordingConnections {
            fail_ensure: true,
            ..Default::default()
        });
        let (id, _registration) = register_cat_adapter(&fixture).await;

        let err = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("node", "Launch"))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::ChannelClosed));
        assert_eq!(fixture.extension.session_count().await, 0);
    }

    #[tokio::test]
    async fn custom_request_for_unknown_session_is_not_found() {
        let fixture = fixture();
        let err = fixture
            .extension
            .custom_request(SessionId::fresh(), "evaluate", Some(serde_json::json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::SessionNotFound { .. }));
        // No side effect on any registry.
        assert_eq!(fixture.extension.session_count().await, 0);
    }

    #[tokio::test]
    async fn custom_request_reaches_session_forwarder() {
        let fixture = fixture();
        let (id, _registration) = register_cat_adapter(&fixture).await;
        let session = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("node", "Launch"))
            .await
            .unwrap();

        let response = fixture
            .extension
            .custom_request(session, "evaluate", None)
            .await
            .unwrap();
        assert_eq!(response["success"], true);
        assert_eq!(
            fixture.connections.forwarded.lock().unwrap().as_slice(),
            &["evaluate".to_string()]
        );

        fixture.extension.terminate_debug_session(session).await;
    }

    #[tokio::test]
    async fn active_session_pointer_tracks_live_sessions_only() {
        let fixture = fixture();
        let (id, _registration) = register_cat_adapter(&fixture).await;
        let session = fixture
            .extension
            .create_debug_session(id, DebugConfiguration::new("node", "Launch"))
            .await
            .unwrap();

        fixture.extension.session_did_change(Some(session)).await;
        assert_eq!(fixture.extension.active_session().await, Some(session));

        // An unknown id collapses to none.
        fixture
            .extension
            .session_did_change(Some(SessionId::fresh()))
            .await;
        assert_eq!(fixture.extension.active_session().await, None);

        fixture.extension.terminate_debug_session(session).await;
    }

    #[tokio::test]
    async fn breakpoint_notifications_update_snapshot_and_fan_out() {
        let fixture = fixture();
        let mut events = fixture.extension.subscribe();

        let bp = WireBreakpoint::at("file:///a.rs", 5, 0);
        fixture
            .extension
            .breakpoints_did_change(vec![bp.clone()], vec![bp.clone()], vec![], vec![])
            .await;

        assert_eq!(fixture.extension.breakpoints().await, vec![bp.clone()]);
        match events.recv().await.unwrap() {
            DebugExtEvent::BreakpointsChanged { all, added, .. } => {
                assert_eq!(all, vec![bp.clone()]);
                assert_eq!(added, vec![bp]);
            }
            other => panic!("expected BreakpointsChanged, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn custom_events_fan_out_to_subscribers() {
        let fixture = fixture();
        let mut events = fixture.extension.subscribe();
        let session = SessionId::fresh();

        fixture
            .extension
            .on_session_custom_event(session, "heapUsage".into(), Some(serde_json::json!(42)))
            .await;

        match events.recv().await.unwrap() {
            DebugExtEvent::SessionCustomEvent {
                session: from,
                event,
                body,
            } => {
                assert_eq!(from, session);
                assert_eq!(event, "heapUsage");
                assert_eq!(body, Some(serde_json::json!(42)));
            }
            other => panic!("expected SessionCustomEvent, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn console_passthrough_reaches_host() {
        let fixture = fixture();
        fixture.extension.append_to_console("out").await;
        fixture.extension.append_line_to_console("line").await;
        let console = fixture.host.console.lock().unwrap();
        assert_eq!(console.as_slice(), &["out".to_string(), "line\n".to_string()]);
    }
}
