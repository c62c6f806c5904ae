use sysreport_domain::{inspect, SubscriberRegistry};
use sysreport_render::render_subscriber_category;
use sysreport_types::EventCategory;

/// Build the subscriber report for the given category whitelist.
///
/// Categories render in the caller's order; empty categories keep their
/// header.
pub fn run_subscriber_report(
    registry: &dyn SubscriberRegistry,
    categories: &[EventCategory],
) -> String {
    let mut out = String::new();
    for entry in inspect(registry, categories) {
        out.push_str(&render_subscriber_category(&entry.category, &entry.subscribers));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sysreport_types::RegistrySnapshot;

    #[test]
    fn empty_registry_renders_one_header_per_category() {
        let snapshot = RegistrySnapshot::default();
        let categories = EventCategory::default_whitelist();
        let report = run_subscriber_report(&snapshot, &categories);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), categories.len());
        assert!(lines.iter().all(|line| line.ends_with(':')));
    }

    #[test]
    fn subscribers_render_under_their_category() {
        let mut snapshot = RegistrySnapshot::default();
        snapshot.subscribers.insert(
            "object-created".to_string(),
            vec!["demo.Watcher".to_string()],
        );
        let categories = vec![EventCategory::new("object-created")];
        assert_eq!(
            run_subscriber_report(&snapshot, &categories),
            "object-created:\n    demo.Watcher\n"
        );
    }
}
