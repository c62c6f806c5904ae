use crate::{AppInfo, DependencyDescriptor, PluginDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk registry snapshot consumed by the CLI.
///
/// Dependency and plugin entries keep their file order; that order is the
/// discovery order the clash detector and plugin summarizer see.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySnapshot {
    /// One-line application/version banner heading the report.
    pub banner: String,
    /// Installed application variants, keyed by name.
    pub apps: BTreeMap<String, AppInfo>,
    /// Dependency descriptors in discovery order.
    pub dependencies: Vec<DependencyDescriptor>,
    /// Plugin registrations in registration order.
    pub plugins: Vec<PluginDescriptor>,
    /// Subscriber display strings per event category.
    pub subscribers: BTreeMap<String, Vec<String>>,
}
