use std::collections::BTreeMap;
use sysreport_domain::{
    detect_clashes, resolve_source_ref, summarize, DependencySource, ManifestLookup,
    PluginRegistry, ProgressSink,
};
use sysreport_render::{
    format_map, render_app_block, render_dependency_block, render_plugin_group, render_sections,
    render_warning_line, Section,
};
use sysreport_types::AppInfo;

/// Input for the diagnostics report use case.
///
/// Registries are read through their capability traits; everything else
/// is a caller-provided snapshot map.
pub struct ReportInput<'a> {
    /// One-line application/version banner heading the report.
    pub banner: &'a str,
    /// Installed application variants, keyed by name.
    pub apps: &'a BTreeMap<String, AppInfo>,
    pub dependencies: &'a dyn DependencySource,
    pub manifests: &'a dyn ManifestLookup,
    pub plugins: &'a dyn PluginRegistry,
    pub properties: &'a BTreeMap<String, Option<String>>,
    pub environment: &'a BTreeMap<String, Option<String>>,
    pub miscellany: &'a BTreeMap<String, Option<String>>,
}

/// Fixed progress checkpoints; one more is added per dependency
/// descriptor.
const FIXED_PROGRESS_STEPS: u64 = 10;

struct Checkpoints<'p> {
    sink: &'p mut dyn ProgressSink,
    current: u64,
    max: u64,
}

impl Checkpoints<'_> {
    fn step(&mut self) {
        self.current += 1;
        self.sink.show_progress(self.current, self.max);
    }
}

/// Build the full diagnostics report.
///
/// Sections appear in fixed order: banner, per-application metadata,
/// dependency listing with clash warnings interleaved, plugin summary,
/// system properties, environment variables, toolchain miscellany.
/// Progress is advisory only and never affects report content. There is
/// no fatal path: missing data renders as an omitted line or a
/// placeholder.
pub fn run_report(input: ReportInput<'_>, progress: &mut dyn ProgressSink) -> String {
    // One snapshot per registry up front; the pass must not observe
    // concurrent mutation of the live registries.
    let descriptors = input.dependencies.all_descriptors();

    let mut checkpoints = Checkpoints {
        sink: progress,
        current: 0,
        max: FIXED_PROGRESS_STEPS + descriptors.len() as u64,
    };
    checkpoints.step();

    let mut sections = Vec::new();

    sections.push(Section::bare(format!("{}\n", input.banner)));
    checkpoints.step();

    let mut app_blocks = String::new();
    for (name, app) in input.apps {
        app_blocks.push_str(&render_app_block(name, app));
    }
    sections.push(Section::bare(app_blocks));
    checkpoints.step();

    // Clash detection runs over discovery order; the listing below sorts
    // separately, for display only.
    let clashes = detect_clashes(&descriptors);
    checkpoints.step();

    let mut dependency_listing = String::new();
    for warning in &clashes.warnings {
        dependency_listing.push_str(&render_warning_line(warning));
    }
    let mut sorted: Vec<_> = descriptors.iter().collect();
    sorted.sort();
    for descriptor in sorted {
        checkpoints.step();
        let source_ref = resolve_source_ref(descriptor, input.manifests);
        dependency_listing.push_str(&render_dependency_block(
            descriptor,
            source_ref.as_deref(),
        ));
    }
    sections.push(Section::bare(dependency_listing));
    checkpoints.step();

    let groups = summarize(input.plugins);
    checkpoints.step();

    let mut plugin_summary = String::new();
    for group in &groups {
        plugin_summary.push_str(&render_plugin_group(&group.declared_type, &group.plugins));
    }
    sections.push(Section::bare(plugin_summary));
    checkpoints.step();

    sections.push(Section::headed(
        "System properties",
        format_map(input.properties),
    ));
    checkpoints.step();

    sections.push(Section::headed(
        "Environment variables",
        format_map(input.environment),
    ));
    checkpoints.step();

    sections.push(Section::headed(
        "Additional miscellany",
        format_map(input.miscellany),
    ));
    checkpoints.step();

    render_sections(&sections)
}
