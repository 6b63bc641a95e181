//! The optional capability surface of a contribution's provider.

use async_trait::async_trait;

use tether_proto::{BridgeError, DebugConfiguration};

/// Which optional capabilities a provider implements.
///
/// Declared once at registration; the registry consults these flags
/// instead of probing the provider dynamically. A capability left off is
/// answered with the empty result without calling the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Implements [`AdapterProvider::provide_configurations`].
    pub provide_configurations: bool,
    /// Implements [`AdapterProvider::resolve_configuration`].
    pub resolve_configuration: bool,
    /// Implements [`AdapterProvider::provide_executable`].
    pub provide_executable: bool,
}

impl ProviderCapabilities {
    /// All capabilities implemented.
    pub fn all() -> Self {
        Self {
            provide_configurations: true,
            resolve_configuration: true,
            provide_executable: true,
        }
    }
}

/// Behavioral capabilities of a debug-adapter contribution.
///
/// Default implementations return the empty result, so a provider only
/// overrides what its [`ProviderCapabilities`] declare. Errors raised
/// here are the contribution's own and pass through the bridge
/// unmodified on the session-creation path.
#[async_trait]
pub trait AdapterProvider: Send + Sync {
    /// Offer initial launch configurations.
    async fn provide_configurations(
        &self,
        folder: Option<&str>,
    ) -> Result<Vec<DebugConfiguration>, BridgeError> {
        let _ = folder;
        Ok(Vec::new())
    }

    /// Fill in or veto a configuration before a session starts. `None`
    /// means the provider does not resolve this configuration.
    async fn resolve_configuration(
        &self,
        configuration: DebugConfiguration,
        folder: Option<&str>,
    ) -> Result<Option<DebugConfiguration>, BridgeError> {
        let _ = (configuration, folder);
        Ok(None)
    }

    /// Supply the adapter executable as loose descriptor data. `None`
    /// falls back to resolution from the registration metadata.
    async fn provide_executable(
        &self,
        configuration: &DebugConfiguration,
    ) -> Result<Option<serde_json::Value>, BridgeError> {
        let _ = configuration;
        Ok(None)
    }
}
