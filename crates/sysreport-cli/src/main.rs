//! CLI entry point for sysreport.
//!
//! This module is intentionally thin: it handles argument parsing, I/O,
//! logging, and progress wiring. All report logic lives in `sysreport-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use sysreport_app::{run_report, run_subscriber_report, ReportInput};
use sysreport_domain::NullProgress;
use sysreport_host::DirManifestLookup;
use sysreport_types::{EventCategory, RegistrySnapshot};

mod progress;

use progress::BarProgress;

#[derive(Parser, Debug)]
#[command(
    name = "sysreport",
    version,
    about = "Deterministic runtime diagnostics reports"
)]
struct Cli {
    /// Registry snapshot JSON; defaults to an empty snapshot.
    #[arg(long)]
    snapshot: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the full diagnostics report.
    Report {
        /// Where to write the report (stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Root that container paths in descriptor locations resolve
        /// against.
        #[arg(long, default_value = ".")]
        container_root: Utf8PathBuf,

        /// Suppress the progress bar.
        #[arg(long)]
        no_progress: bool,
    },

    /// Render the subscriber report for the category whitelist.
    Subscribers {
        /// Categories to query, in order; defaults to the built-in
        /// whitelist.
        #[arg(long = "category")]
        categories: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let snapshot = load_snapshot(cli.snapshot.as_deref())?;

    match cli.cmd {
        Commands::Report {
            output,
            container_root,
            no_progress,
        } => cmd_report(&snapshot, output, container_root, no_progress),
        Commands::Subscribers { categories } => cmd_subscribers(&snapshot, categories),
    }
}

// Respects RUST_LOG; defaults to warnings so swallowed manifest failures
// stay quiet unless asked for.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_snapshot(path: Option<&Utf8Path>) -> anyhow::Result<RegistrySnapshot> {
    let Some(path) = path else {
        return Ok(RegistrySnapshot::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parse {path}"))
}

fn cmd_report(
    snapshot: &RegistrySnapshot,
    output: Option<Utf8PathBuf>,
    container_root: Utf8PathBuf,
    no_progress: bool,
) -> anyhow::Result<()> {
    let manifests = DirManifestLookup::new(container_root);
    let properties = sysreport_host::properties();
    let environment = sysreport_host::environment();
    let miscellany = sysreport_host::toolchain_miscellany();

    let input = ReportInput {
        banner: &snapshot.banner,
        apps: &snapshot.apps,
        dependencies: snapshot,
        manifests: &manifests,
        plugins: snapshot,
        properties: &properties,
        environment: &environment,
        miscellany: &miscellany,
    };

    let report = if no_progress {
        run_report(input, &mut NullProgress)
    } else {
        let mut progress = BarProgress::default();
        let report = run_report(input, &mut progress);
        progress.finish();
        report
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
            }
            std::fs::write(&path, &report).with_context(|| format!("write {path}"))?;
        }
        None => print!("{report}"),
    }
    Ok(())
}

fn cmd_subscribers(snapshot: &RegistrySnapshot, categories: Vec<String>) -> anyhow::Result<()> {
    let categories: Vec<EventCategory> = if categories.is_empty() {
        EventCategory::default_whitelist()
    } else {
        categories.into_iter().map(EventCategory::new).collect()
    };
    print!("{}", run_subscriber_report(snapshot, &categories));
    Ok(())
}
