use std::collections::BTreeMap;
use sysreport_types::{ids, Coordinate, DependencyDescriptor};

/// Outcome of one clash-detection pass over a descriptor list.
#[derive(Clone, Debug, Default)]
pub struct ClashReport<'a> {
    /// First-seen descriptor per coordinate.
    pub kept: BTreeMap<Coordinate, &'a DependencyDescriptor>,
    /// One warning line per shadowed duplicate, in discovery order.
    pub warnings: Vec<String>,
}

/// Detect coordinate clashes in discovery order.
///
/// The kept entry for a coordinate is always the first one encountered;
/// later duplicates never overwrite it, regardless of version ordering.
/// First-discovered wins, not highest-version. Callers must not sort the
/// input before calling this.
pub fn detect_clashes(descriptors: &[DependencyDescriptor]) -> ClashReport<'_> {
    let mut report = ClashReport::default();
    for descriptor in descriptors {
        let coordinate = descriptor.coordinate();
        match report.kept.get(&coordinate) {
            None => {
                report.kept.insert(coordinate, descriptor);
            }
            Some(kept) => {
                report.warnings.push(format!(
                    "Version clash for {}: {} shadows {}",
                    coordinate,
                    version_text(descriptor),
                    version_text(kept)
                ));
            }
        }
    }
    report
}

fn version_text(descriptor: &DependencyDescriptor) -> &str {
    descriptor
        .version
        .as_deref()
        .unwrap_or(ids::NULL_PLACEHOLDER)
}
