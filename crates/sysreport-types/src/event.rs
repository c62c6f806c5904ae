use crate::ids;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of an event category in the publish/subscribe registry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventCategory(String);

impl EventCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The default whitelist, in render order.
    pub fn default_whitelist() -> Vec<EventCategory> {
        ids::DEFAULT_EVENT_CATEGORIES
            .iter()
            .map(|name| EventCategory::new(*name))
            .collect()
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
