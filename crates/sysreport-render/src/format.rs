use std::collections::BTreeMap;
use std::fmt::Write as _;
use sysreport_types::ids;

#[cfg(windows)]
const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: char = ':';

/// Render a key/value map, one `<key> = <value>` line per entry.
///
/// Entries come out in the map's byte-wise ascending key order. Absent
/// values render as `(null)`. Keys ending in `.dirs` or `.path` are path
/// lists: their value is split on the platform path separator and
/// rendered as an indented bulleted block, even for zero or one segment.
pub fn format_map(entries: &BTreeMap<String, Option<String>>) -> String {
    format_map_with_separator(entries, PATH_LIST_SEPARATOR)
}

/// Separator-parameterised variant of [`format_map`].
pub fn format_map_with_separator(
    entries: &BTreeMap<String, Option<String>>,
    separator: char,
) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        let value = value.as_deref().unwrap_or(ids::NULL_PLACEHOLDER);
        if is_path_list_key(key) {
            let _ = writeln!(out, "{key} = {{");
            for segment in split_path_list(value, separator) {
                let _ = writeln!(out, "\t{segment}");
            }
            out.push_str("}\n");
        } else {
            let _ = writeln!(out, "{key} = {value}");
        }
    }
    out
}

// Trailing separators do not produce empty segments; a lone separator
// yields zero segments. An empty value still yields one empty segment.
fn split_path_list(value: &str, separator: char) -> Vec<&str> {
    let mut segments: Vec<&str> = value.split(separator).collect();
    if !value.is_empty() {
        while segments.last() == Some(&"") {
            segments.pop();
        }
    }
    segments
}

fn is_path_list_key(key: &str) -> bool {
    ids::PATH_LIST_SUFFIXES
        .iter()
        .any(|suffix| key.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(entries: &[(&str, Option<&str>)]) -> BTreeMap<String, Option<String>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn renders_entries_in_key_order() {
        let entries = map(&[("b", Some("2")), ("a", Some("1"))]);
        assert_eq!(format_map(&entries), "a = 1\nb = 2\n");
    }

    #[test]
    fn absent_value_renders_placeholder() {
        let entries = map(&[("missing", None)]);
        assert_eq!(format_map(&entries), "missing = (null)\n");
    }

    #[test]
    fn path_list_key_renders_bulleted_block() {
        let entries = map(&[("java.ext.dirs", Some("/a:/b"))]);
        assert_eq!(
            format_map_with_separator(&entries, ':'),
            "java.ext.dirs = {\n\t/a\n\t/b\n}\n"
        );
    }

    #[test]
    fn path_suffix_triggers_block_too() {
        let entries = map(&[("tool.path", Some("/bin"))]);
        assert_eq!(
            format_map_with_separator(&entries, ':'),
            "tool.path = {\n\t/bin\n}\n"
        );
    }

    #[test]
    fn trailing_separator_adds_no_empty_segment() {
        let entries = map(&[("x.dirs", Some("/a:"))]);
        assert_eq!(
            format_map_with_separator(&entries, ':'),
            "x.dirs = {\n\t/a\n}\n"
        );
    }

    #[test]
    fn lone_separator_renders_empty_block() {
        let entries = map(&[("x.dirs", Some(":"))]);
        assert_eq!(format_map_with_separator(&entries, ':'), "x.dirs = {\n}\n");
    }

    #[test]
    fn interior_empty_segments_are_kept() {
        let entries = map(&[("x.dirs", Some("/a::/b"))]);
        assert_eq!(
            format_map_with_separator(&entries, ':'),
            "x.dirs = {\n\t/a\n\t\n\t/b\n}\n"
        );
    }

    #[test]
    fn path_list_block_applies_even_to_empty_value() {
        // One empty segment, matching the single-segment rule.
        let entries = map(&[("empty.dirs", Some(""))]);
        assert_eq!(
            format_map_with_separator(&entries, ':'),
            "empty.dirs = {\n\t\n}\n"
        );
    }

    #[test]
    fn values_are_rendered_verbatim() {
        let entries = map(&[("key", Some("a = b\tc"))]);
        assert_eq!(format_map(&entries), "key = a = b\tc\n");
    }

    proptest! {
        /// One line per non-special key, in ascending key order.
        #[test]
        fn one_sorted_line_per_plain_key(
            entries in proptest::collection::btree_map(
                "[a-z]{1,8}",
                proptest::option::of("[ -~]{0,12}"),
                0..16,
            )
        ) {
            let text = format_map(&entries);
            let lines: Vec<&str> = text.lines().collect();
            prop_assert_eq!(lines.len(), entries.len());
            for (line, key) in lines.iter().zip(entries.keys()) {
                let expected = format!("{key} = ");
                prop_assert!(line.starts_with(&expected));
            }
        }
    }
}
