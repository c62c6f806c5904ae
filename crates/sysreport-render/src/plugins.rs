use std::fmt::Write as _;
use sysreport_types::{PluginDescriptor, PluginType};

/// Render one plugin-type section: a counted header and one display line
/// per registration, in the order given. Callers pass only exact-match
/// registrations; empty groups are suppressed upstream and never reach
/// this function.
pub fn render_plugin_group(declared_type: &PluginType, plugins: &[PluginDescriptor]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- {} {} plugins --", plugins.len(), declared_type);
    for plugin in plugins {
        let _ = writeln!(out, "{}", plugin.display);
    }
    out
}
