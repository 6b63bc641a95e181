//! Extension-side table of registered debug-adapter contributions.
//!
//! An explicit owned table keyed by contribution id: empty at process
//! start, every entry dropped at process end. Capability queries degrade
//! silently — an id that disappeared mid-flight returns the empty result
//! because the call is inherently racing against the other side of the
//! boundary.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tether_proto::{ContributionId, DebuggerContribution, DebuggerDescription};

use crate::provider::{AdapterProvider, ProviderCapabilities};

/// One registered contribution.
pub struct ContributionEntry {
    /// The debug type this contribution handles.
    pub debug_type: String,
    /// The contribution's capability provider.
    pub provider: Arc<dyn AdapterProvider>,
    /// Capabilities declared at registration.
    pub capabilities: ProviderCapabilities,
    /// Package metadata (per-platform executable descriptors, languages,
    /// schema attributes, snippets).
    pub metadata: DebuggerContribution,
    /// Root path of the owning plugin.
    pub plugin_path: PathBuf,
}

/// Maps contribution ids to registered entries.
#[derive(Default)]
pub struct ContributionRegistry {
    entries: HashMap<ContributionId, ContributionEntry>,
}

impl ContributionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entry under a fresh id. Never fails.
    pub fn register(&mut self, entry: ContributionEntry) -> ContributionId {
        let id = ContributionId::fresh();
        self.entries.insert(id, entry);
        id
    }

    /// Remove an entry. Returns `true` when something was removed.
    pub fn remove(&mut self, id: &ContributionId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Look up an entry.
    pub fn get(&self, id: &ContributionId) -> Option<&ContributionEntry> {
        self.entries.get(id)
    }

    /// Whether the id is registered.
    pub fn contains(&self, id: &ContributionId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered contributions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lightweight description advertised to the host for an entry.
    pub fn description(&self, id: &ContributionId) -> Option<DebuggerDescription> {
        self.entries.get(id).map(|entry| DebuggerDescription {
            debug_type: entry.debug_type.clone(),
            label: entry
                .metadata
                .label
                .clone()
                .unwrap_or_else(|| entry.debug_type.clone()),
        })
    }

    /// The provider and its declared capabilities, cloned out so the
    /// caller can await on it without holding the registry.
    pub fn provider(
        &self,
        id: &ContributionId,
    ) -> Option<(Arc<dyn AdapterProvider>, ProviderCapabilities)> {
        self.entries
            .get(id)
            .map(|entry| (entry.provider.clone(), entry.capabilities))
    }

    /// Languages supported by a contribution. Empty for an unknown id or
    /// a contribution that declares none.
    pub fn supported_languages(&self, id: &ContributionId) -> Vec<String> {
        self.entries
            .get(id)
            .and_then(|entry| entry.metadata.languages.clone())
            .unwrap_or_default()
    }

    /// JSON-schema attribute documents, one per request kind. Returned
    /// only when the metadata defines them; empty otherwise.
    pub fn schema_attributes(&self, id: &ContributionId) -> Vec<serde_json::Value> {
        self.entries
            .get(id)
            .and_then(|entry| entry.metadata.configuration_attributes.as_ref())
            .map(|attributes| attributes.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Configuration snippets. Empty for an unknown id or a contribution
    /// that declares none.
    pub fn configuration_snippets(&self, id: &ContributionId) -> Vec<serde_json::Value> {
        self.entries
            .get(id)
            .and_then(|entry| entry.metadata.configuration_snippets.clone())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for ContributionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContributionRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}
