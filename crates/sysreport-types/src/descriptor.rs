use crate::ids;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Immutable metadata record about one discovered dependency.
///
/// Every field may be absent; the report renders only what is present.
/// `location` is an opaque path/URI and may embed a container reference
/// such as `lib/foo.jar!/META-INF/maven/pom.xml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyDescriptor {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub project_name: Option<String>,
    pub project_url: Option<String>,
    pub inception_year: Option<String>,
    pub organization_name: Option<String>,
    pub organization_url: Option<String>,
    pub scm_connection: Option<String>,
    pub scm_tag: Option<String>,
    pub location: Option<String>,
}

impl DependencyDescriptor {
    /// The version-independent identity of this dependency.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }

    /// Block title: the project name, falling back to the coordinate.
    pub fn title(&self) -> String {
        match &self.project_name {
            Some(name) => name.clone(),
            None => self.coordinate().to_string(),
        }
    }
}

impl Ord for DependencyDescriptor {
    /// Natural ordering for stable report listings: group, then artifact,
    /// then version. Absent fields sort first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.group_id
            .cmp(&other.group_id)
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl PartialOrd for DependencyDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `group:artifact` pair identifying a dependency irrespective of
/// version.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self.group_id.as_deref().unwrap_or(ids::NULL_PLACEHOLDER);
        let artifact = self.artifact_id.as_deref().unwrap_or(ids::NULL_PLACEHOLDER);
        write!(f, "{group}:{artifact}")
    }
}
