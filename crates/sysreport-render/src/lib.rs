//! Deterministic text rendering for the diagnostics report.
//!
//! Pure string builders over snapshot data. Values are rendered verbatim,
//! no escaping; determinism comes from the callers' ordering guarantees
//! and the byte-wise key ordering of the map formatter.

#![forbid(unsafe_code)]

mod apps;
mod dependency;
mod format;
mod plugins;
mod section;
mod subscribers;

pub use apps::render_app_block;
pub use dependency::{render_dependency_block, render_warning_line};
pub use format::{format_map, format_map_with_separator};
pub use plugins::render_plugin_group;
pub use section::{render_sections, Section};
pub use subscribers::render_subscriber_category;
