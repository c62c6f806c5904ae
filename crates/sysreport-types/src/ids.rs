//! Stable identifiers, sentinels, and whitelists.
//!
//! Fixed strings the report format depends on live here so the rendering
//! and resolution code never hard-codes them inline.

/// Placeholder rendered for an absent value.
pub const NULL_PLACEHOLDER: &str = "(null)";

/// Manifest key holding the build identifier of the container a
/// descriptor was read from.
pub const BUILD_ID_KEY: &str = "Implementation-Build";

/// Separator between a container path and the entry inside it,
/// e.g. `lib/foo.jar!/META-INF/maven/pom.xml`.
pub const CONTAINER_SEPARATOR: &str = "!/";

/// Manifest entry path inside an exploded container.
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// Tag values that do not identify a real revision. A descriptor whose
/// scm tag is one of these falls back to the container manifest lookup.
pub const SENTINEL_TAGS: &[&str] = &["HEAD", "master"];

/// Key suffixes whose values are path lists and render as bulleted blocks.
pub const PATH_LIST_SUFFIXES: &[&str] = &[".dirs", ".path"];

/// Default event-category whitelist for the subscriber report, in
/// render order.
pub const DEFAULT_EVENT_CATEGORIES: &[&str] = &[
    "objects-list",
    "object-created",
    "object-deleted",
    "display-activated",
    "display-updated",
];
