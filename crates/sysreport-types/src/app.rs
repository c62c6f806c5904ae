use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata for one installed application variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub title: Option<String>,
    pub version: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    /// The application's own manifest attributes, if it carries any.
    pub manifest: Option<BTreeMap<String, String>>,
}
