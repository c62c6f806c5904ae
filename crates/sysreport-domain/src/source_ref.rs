use crate::registries::ManifestLookup;
use sysreport_types::{ids, DependencyDescriptor};
use tracing::debug;

/// Best-effort revision identifier for a descriptor.
///
/// Fallback chain, first success wins:
/// 1. the descriptor's scm tag, when present, non-empty, and not a
///    sentinel (`HEAD`, `master`);
/// 2. the `Implementation-Build` attribute of the manifest of the
///    container the descriptor was read from.
///
/// Manifest failures are logged at debug level and swallowed; resolution
/// degrades to `None`, it never fails the report.
pub fn resolve_source_ref(
    descriptor: &DependencyDescriptor,
    manifests: &dyn ManifestLookup,
) -> Option<String> {
    if let Some(tag) = &descriptor.scm_tag
        && !tag.is_empty()
        && !ids::SENTINEL_TAGS.contains(&tag.as_str())
    {
        return Some(tag.clone());
    }

    let location = descriptor.location.as_deref()?;
    let (container, _entry) = location.split_once(ids::CONTAINER_SEPARATOR)?;
    match manifests.open_manifest(container) {
        Ok(manifest) => manifest.get(ids::BUILD_ID_KEY).cloned(),
        Err(error) => {
            debug!(container, %error, "container manifest lookup failed");
            None
        }
    }
}
