//! The host-side bridge service.
//!
//! Implements the remote entry points invoked by the extension side and
//! keeps the contributor-proxy table consistent with registrations
//! arriving over the boundary.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tokio::sync::Mutex;

use tether_proto::{
    BridgeError, ContributionId, DebuggerDescription, ExtensionRpc, HostRpc, NameOrConfiguration,
    SessionId, WireBreakpoint,
};

use crate::authority::{
    BreakpointStore, ConfigurationStore, ContributionManager, DebugConsole, SessionManager,
};
use crate::breakpoint::MarkerBreakpoint;
use crate::proxy::ContributorProxy;

/// The host side of the bridge.
pub struct DebugHostBridge {
    proxies: Mutex<HashMap<ContributionId, Arc<ContributorProxy>>>,
    extension: OnceLock<Arc<dyn ExtensionRpc>>,
    sessions: Arc<dyn SessionManager>,
    breakpoints: Arc<dyn BreakpointStore>,
    configurations: Arc<dyn ConfigurationStore>,
    contributions: Arc<dyn ContributionManager>,
    console: Arc<dyn DebugConsole>,
}

impl DebugHostBridge {
    /// Build the bridge over the host's authorities.
    pub fn new(
        sessions: Arc<dyn SessionManager>,
        breakpoints: Arc<dyn BreakpointStore>,
        configurations: Arc<dyn ConfigurationStore>,
        contributions: Arc<dyn ContributionManager>,
        console: Arc<dyn DebugConsole>,
    ) -> Self {
        Self {
            proxies: Mutex::new(HashMap::new()),
            extension: OnceLock::new(),
            sessions,
            breakpoints,
            configurations,
            contributions,
            console,
        }
    }

    /// Bind the outbound proxy to the extension side. Registrations
    /// arriving before this are dropped with a warning; set it once,
    /// right after construction.
    pub fn bind_extension(&self, extension: Arc<dyn ExtensionRpc>) {
        if self.extension.set(extension).is_err() {
            tracing::warn!("extension proxy already bound");
        }
    }

    /// Look up the proxy for a contribution.
    pub async fn proxy(&self, id: &ContributionId) -> Option<Arc<ContributorProxy>> {
        self.proxies.lock().await.get(id).cloned()
    }

    /// Number of live contributor proxies.
    pub async fn proxy_count(&self) -> usize {
        self.proxies.lock().await.len()
    }
}

#[async_trait]
impl HostRpc for DebugHostBridge {
    async fn append_to_debug_console(&self, text: String) {
        self.console.append(&text);
    }

    async fn append_line_to_debug_console(&self, text: String) {
        self.console.append_line(&text);
    }

    async fn register_debug_configuration_provider(
        &self,
        contribution: ContributionId,
        description: DebuggerDescription,
    ) {
        let Some(extension) = self.extension.get() else {
            tracing::warn!(contribution = %contribution, "registration before extension bound");
            return;
        };
        let proxy = Arc::new(ContributorProxy::new(
            contribution,
            description.clone(),
            extension.clone(),
        ));
        self.proxies.lock().await.insert(contribution, proxy.clone());
        self.contributions.register(&description.debug_type, proxy);
        tracing::debug!(contribution = %contribution, debug_type = %description.debug_type, "contributor proxy registered");
    }

    async fn unregister_debug_configuration_provider(&self, contribution: ContributionId) {
        let removed = self.proxies.lock().await.remove(&contribution);
        match removed {
            Some(proxy) => {
                self.contributions.unregister(proxy.debug_type());
                tracing::debug!(contribution = %contribution, "contributor proxy removed");
            }
            None => {
                tracing::debug!(contribution = %contribution, "unregistration for unknown contribution ignored");
            }
        }
    }

    async fn add_breakpoints(&self, breakpoints: Vec<WireBreakpoint>) {
        let markers: Vec<MarkerBreakpoint> = breakpoints
            .iter()
            .filter_map(MarkerBreakpoint::from_wire)
            .collect();
        if !markers.is_empty() {
            self.breakpoints.add(markers);
        }
    }

    async fn remove_breakpoints(&self, breakpoints: Vec<WireBreakpoint>) {
        let markers: Vec<MarkerBreakpoint> = breakpoints
            .iter()
            .filter_map(MarkerBreakpoint::from_wire)
            .collect();
        if !markers.is_empty() {
            self.breakpoints.remove(markers);
        }
    }

    async fn custom_request(
        &self,
        session: SessionId,
        command: String,
        args: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, BridgeError> {
        self.sessions.custom_request(session, &command, args).await
    }

    async fn start_debugging(
        &self,
        folder: Option<String>,
        what: NameOrConfiguration,
    ) -> Result<bool, BridgeError> {
        let configuration = match what {
            NameOrConfiguration::Configuration(configuration) => configuration,
            NameOrConfiguration::Name(name) => {
                match self.configurations.find(folder.as_deref(), &name) {
                    Some(configuration) => configuration,
                    // A missing named configuration is not an error.
                    None => return Ok(false),
                }
            }
        };
        self.sessions.start(folder.as_deref(), configuration).await
    }
}
