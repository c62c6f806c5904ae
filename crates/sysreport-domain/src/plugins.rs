use crate::registries::PluginRegistry;
use sysreport_types::{PluginDescriptor, PluginType};

/// Registrations for one declared type, filtered to exact matches.
#[derive(Clone, Debug)]
pub struct PluginTypeGroup {
    pub declared_type: PluginType,
    pub plugins: Vec<PluginDescriptor>,
}

/// Group the registry's plugins by declared type.
///
/// Types are deduplicated and sorted by name; that ordering governs
/// section order in the report, independent of registration order.
/// Within a type, only registrations whose own declared type matches
/// exactly are counted — narrower sub-registrations returned by the
/// registry's matching rules are dropped. Types with no exact match
/// produce no group at all.
pub fn summarize(registry: &dyn PluginRegistry) -> Vec<PluginTypeGroup> {
    let mut groups = Vec::new();
    for declared_type in registry.declared_types() {
        let plugins: Vec<PluginDescriptor> = registry
            .descriptors_for(&declared_type)
            .into_iter()
            .filter(|p| p.declared_type == declared_type)
            .collect();
        if plugins.is_empty() {
            continue;
        }
        groups.push(PluginTypeGroup {
            declared_type,
            plugins,
        });
    }
    groups
}
