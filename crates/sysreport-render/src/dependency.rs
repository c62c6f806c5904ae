use std::fmt::Write as _;
use sysreport_types::DependencyDescriptor;

/// Render the report block for one dependency descriptor.
///
/// Only present fields produce lines; the source ref line in particular
/// is omitted entirely when resolution yielded nothing.
pub fn render_dependency_block(
    descriptor: &DependencyDescriptor,
    source_ref: Option<&str>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- Library: {} --", descriptor.title());
    push_field(&mut out, "path", descriptor.location.as_deref());
    push_field(&mut out, "groupId", descriptor.group_id.as_deref());
    push_field(&mut out, "artifactId", descriptor.artifact_id.as_deref());
    push_field(&mut out, "version", descriptor.version.as_deref());
    push_field(&mut out, "project URL", descriptor.project_url.as_deref());
    push_field(&mut out, "inception year", descriptor.inception_year.as_deref());
    push_field(
        &mut out,
        "organization name",
        descriptor.organization_name.as_deref(),
    );
    push_field(
        &mut out,
        "organization URL",
        descriptor.organization_url.as_deref(),
    );
    push_field(&mut out, "scm", descriptor.scm_connection.as_deref());
    push_field(&mut out, "source ref", source_ref);
    out
}

/// Render one interleaved clash warning line.
pub fn render_warning_line(warning: &str) -> String {
    format!("[WARNING] {warning}\n")
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "{label} = {value}");
    }
}
