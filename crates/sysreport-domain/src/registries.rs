use std::collections::{BTreeMap, BTreeSet};
use sysreport_types::{
    DependencyDescriptor, EventCategory, PluginDescriptor, PluginType, RegistrySnapshot,
};

/// Source of discovered dependency descriptors.
///
/// Discovery order is unspecified but stable within one process lifetime;
/// the clash detector relies on that order, so implementations must not
/// re-sort.
pub trait DependencySource {
    fn all_descriptors(&self) -> Vec<DependencyDescriptor>;
}

/// Opens the embedded manifest of a container (an archive or an exploded
/// directory) as a flat key/value map.
pub trait ManifestLookup {
    fn open_manifest(&self, container: &str) -> anyhow::Result<BTreeMap<String, String>>;
}

/// Live plugin registry, indexed by declared capability type.
pub trait PluginRegistry {
    /// Distinct declared types present in the registry.
    fn declared_types(&self) -> BTreeSet<PluginType>;

    /// All registrations matching `declared_type`, in registration order.
    /// May include narrower sub-registrations; callers that want exact
    /// matches filter on the descriptor's own declared type.
    fn descriptors_for(&self, declared_type: &PluginType) -> Vec<PluginDescriptor>;
}

/// Live publish/subscribe registry.
pub trait SubscriberRegistry {
    /// Current subscriber display strings for `category`, in the
    /// registry's own order. Always fetched fresh, never cached.
    fn subscribers_for(&self, category: &EventCategory) -> Vec<String>;
}

impl DependencySource for RegistrySnapshot {
    fn all_descriptors(&self) -> Vec<DependencyDescriptor> {
        self.dependencies.clone()
    }
}

impl PluginRegistry for RegistrySnapshot {
    fn declared_types(&self) -> BTreeSet<PluginType> {
        self.plugins
            .iter()
            .map(|p| p.declared_type.clone())
            .collect()
    }

    /// Snapshot matching rule: a registration matches its own declared
    /// type, and any type it narrows by dotted-name nesting (so a query
    /// for `demo.Command` also returns `demo.Command.Interactive`
    /// registrations).
    fn descriptors_for(&self, declared_type: &PluginType) -> Vec<PluginDescriptor> {
        let narrower_prefix = format!("{declared_type}.");
        self.plugins
            .iter()
            .filter(|p| {
                p.declared_type == *declared_type
                    || p.declared_type.as_str().starts_with(&narrower_prefix)
            })
            .cloned()
            .collect()
    }
}

impl SubscriberRegistry for RegistrySnapshot {
    fn subscribers_for(&self, category: &EventCategory) -> Vec<String> {
        self.subscribers
            .get(category.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

/// Static manifest table, mostly useful in tests and for snapshots that
/// carry manifests inline.
#[derive(Clone, Debug, Default)]
pub struct StaticManifests {
    manifests: BTreeMap<String, BTreeMap<String, String>>,
}

impl StaticManifests {
    pub fn insert(
        &mut self,
        container: impl Into<String>,
        manifest: BTreeMap<String, String>,
    ) {
        self.manifests.insert(container.into(), manifest);
    }
}

impl ManifestLookup for StaticManifests {
    fn open_manifest(&self, container: &str) -> anyhow::Result<BTreeMap<String, String>> {
        self.manifests
            .get(container)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no manifest for container: {container}"))
    }
}
