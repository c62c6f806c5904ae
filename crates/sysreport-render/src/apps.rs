use crate::format_map;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use sysreport_types::{ids, AppInfo};

/// Render the metadata block for one installed application variant.
///
/// The four identity lines always appear, absent values rendering as the
/// placeholder; manifest attributes follow through the map formatter when
/// the application carries any.
pub fn render_app_block(name: &str, app: &AppInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- Application: {name} --");
    push_line(&mut out, "Title", app.title.as_deref());
    push_line(&mut out, "Version", app.version.as_deref());
    push_line(&mut out, "groupId", app.group_id.as_deref());
    push_line(&mut out, "artifactId", app.artifact_id.as_deref());
    if let Some(manifest) = &app.manifest {
        let entries: BTreeMap<String, Option<String>> = manifest
            .iter()
            .map(|(k, v)| (k.clone(), Some(v.clone())))
            .collect();
        out.push_str(&format_map(&entries));
    }
    out
}

fn push_line(out: &mut String, label: &str, value: Option<&str>) {
    let _ = writeln!(out, "{label} = {}", value.unwrap_or(ids::NULL_PLACEHOLDER));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_identity_lines_with_placeholder() {
        let app = AppInfo {
            title: Some("Demo".to_string()),
            version: Some("1.0.0".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render_app_block("demo", &app),
            "\n-- Application: demo --\n\
             Title = Demo\n\
             Version = 1.0.0\n\
             groupId = (null)\n\
             artifactId = (null)\n"
        );
    }

    #[test]
    fn manifest_attributes_follow_identity_lines() {
        let mut manifest = BTreeMap::new();
        manifest.insert("Implementation-Build".to_string(), "abc1234".to_string());
        let app = AppInfo {
            title: Some("Demo".to_string()),
            version: Some("1.0.0".to_string()),
            group_id: Some("org.demo".to_string()),
            artifact_id: Some("demo".to_string()),
            manifest: Some(manifest),
        };
        let block = render_app_block("demo", &app);
        assert!(block.ends_with("Implementation-Build = abc1234\n"));
    }
}
