use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully-qualified name of a plugin capability type.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PluginType(String);

impl PluginType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One plugin registration. `declared_type` is the capability the plugin
/// was registered under; `identity` names the concrete implementation;
/// `display` is the opaque line the report prints for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub declared_type: PluginType,
    pub identity: String,
    pub display: String,
}

impl PluginDescriptor {
    pub fn new(
        declared_type: PluginType,
        identity: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            declared_type,
            identity: identity.into(),
            display: display.into(),
        }
    }
}
