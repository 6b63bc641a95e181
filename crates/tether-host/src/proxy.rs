//! Host-side stand-in for one extension-side contribution.

use std::sync::Arc;

use tether_proto::{
    BridgeError, ContributionId, DebugConfiguration, DebuggerDescription, ExtensionRpc, SessionId,
};

/// Exposes a contribution's capability surface on the host side,
/// implemented as outbound calls back to the extension side. Holds only
/// the contribution's id and advertised description — never a live
/// reference to the contribution itself.
pub struct ContributorProxy {
    id: ContributionId,
    description: DebuggerDescription,
    extension: Arc<dyn ExtensionRpc>,
}

impl ContributorProxy {
    /// Build a proxy for a freshly announced contribution.
    pub fn new(
        id: ContributionId,
        description: DebuggerDescription,
        extension: Arc<dyn ExtensionRpc>,
    ) -> Self {
        Self {
            id,
            description,
            extension,
        }
    }

    /// The contribution's id.
    pub fn id(&self) -> ContributionId {
        self.id
    }

    /// The advertised description.
    pub fn description(&self) -> &DebuggerDescription {
        &self.description
    }

    /// The advertised debug type.
    pub fn debug_type(&self) -> &str {
        &self.description.debug_type
    }

    /// Languages the contribution supports.
    pub async fn supported_languages(&self) -> Vec<String> {
        self.extension.get_supported_languages(self.id).await
    }

    /// The contribution's JSON-schema attribute documents.
    pub async fn schema_attributes(&self) -> Vec<serde_json::Value> {
        self.extension.get_schema_attributes(self.id).await
    }

    /// The contribution's configuration snippets.
    pub async fn configuration_snippets(&self) -> Vec<serde_json::Value> {
        self.extension.get_configuration_snippets(self.id).await
    }

    /// Initial configurations offered by the contribution.
    pub async fn provide_configurations(
        &self,
        folder: Option<String>,
    ) -> Vec<DebugConfiguration> {
        self.extension
            .provide_debug_configurations(self.id, folder)
            .await
    }

    /// Let the contribution fill in a configuration.
    pub async fn resolve_configuration(
        &self,
        configuration: DebugConfiguration,
        folder: Option<String>,
    ) -> Option<DebugConfiguration> {
        self.extension
            .resolve_debug_configuration(self.id, configuration, folder)
            .await
    }

    /// Create a session for this contribution on the extension side.
    pub async fn create_session(
        &self,
        configuration: DebugConfiguration,
    ) -> Result<SessionId, BridgeError> {
        self.extension
            .create_debug_session(self.id, configuration)
            .await
    }

    /// Terminate a session on the extension side.
    pub async fn terminate_session(&self, session: SessionId) {
        self.extension.terminate_debug_session(session).await;
    }
}

impl std::fmt::Debug for ContributorProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContributorProxy")
            .field("id", &self.id)
            .field("debug_type", &self.description.debug_type)
            .finish()
    }
}
