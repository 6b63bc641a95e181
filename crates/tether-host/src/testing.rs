//! Test doubles shared by the host-side tests.

use std::sync::Mutex;

use async_trait::async_trait;

use tether_proto::{
    BridgeError, ContributionId, DebugConfiguration, ExtensionRpc, SessionId, WireBreakpoint,
};

/// Records every extension-side call and answers with scripted data.
#[derive(Default)]
pub(crate) struct RecordingExtension {
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<(ContributionId, DebugConfiguration)>>,
    pub terminated: Mutex<Vec<SessionId>>,
    pub breakpoint_batches: Mutex<Vec<(usize, usize, usize, usize)>>,
    pub languages: Vec<String>,
    pub configurations: Vec<DebugConfiguration>,
    pub session: Option<SessionId>,
}

impl RecordingExtension {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExtensionRpc for RecordingExtension {
    async fn create_debug_session(
        &self,
        contribution: ContributionId,
        configuration: DebugConfiguration,
    ) -> Result<SessionId, BridgeError> {
        self.record("create_debug_session");
        self.created
            .lock()
            .unwrap()
            .push((contribution, configuration));
        Ok(self.session.unwrap_or_else(SessionId::fresh))
    }

    async fn terminate_debug_session(&self, session: SessionId) {
        self.record("terminate_debug_session");
        self.terminated.lock().unwrap().push(session);
    }

    async fn get_supported_languages(&self, _contribution: ContributionId) -> Vec<String> {
        self.record("get_supported_languages");
        self.languages.clone()
    }

    async fn get_schema_attributes(
        &self,
        _contribution: ContributionId,
    ) -> Vec<serde_json::Value> {
        self.record("get_schema_attributes");
        Vec::new()
    }

    async fn get_configuration_snippets(
        &self,
        _contribution: ContributionId,
    ) -> Vec<serde_json::Value> {
        self.record("get_configuration_snippets");
        Vec::new()
    }

    async fn provide_debug_configurations(
        &self,
        _contribution: ContributionId,
        _folder: Option<String>,
    ) -> Vec<DebugConfiguration> {
        self.record("provide_debug_configurations");
        self.configurations.clone()
    }

    async fn resolve_debug_configuration(
        &self,
        _contribution: ContributionId,
        configuration: DebugConfiguration,
        _folder: Option<String>,
    ) -> Option<DebugConfiguration> {
        self.record("resolve_debug_configuration");
        Some(configuration.with_request("launch"))
    }

    async fn on_session_custom_event(
        &self,
        _session: SessionId,
        event: String,
        _body: Option<serde_json::Value>,
    ) {
        self.record(format!("on_session_custom_event:{event}"));
    }

    async fn session_did_create(&self, _session: SessionId) {
        self.record("session_did_create");
    }

    async fn session_did_destroy(&self, _session: SessionId) {
        self.record("session_did_destroy");
    }

    async fn session_did_change(&self, session: Option<SessionId>) {
        self.record(format!("session_did_change:{}", session.is_some()));
    }

    async fn breakpoints_did_change(
        &self,
        all: Vec<WireBreakpoint>,
        added: Vec<WireBreakpoint>,
        removed: Vec<WireBreakpoint>,
        changed: Vec<WireBreakpoint>,
    ) {
        self.record("breakpoints_did_change");
        self.breakpoint_batches.lock().unwrap().push((
            all.len(),
            added.len(),
            removed.len(),
            changed.len(),
        ));
    }
}
