use std::fmt::Write as _;
use sysreport_types::EventCategory;

/// Render one event category: a `<category>:` header and one indented
/// line per subscriber. An empty list still renders the header.
pub fn render_subscriber_category(category: &EventCategory, subscribers: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{category}:");
    for subscriber in subscribers {
        let _ = writeln!(out, "    {subscriber}");
    }
    out
}
