//! Stable data types and IDs used across the sysreport workspace.
//!
//! This crate is intentionally boring:
//! - descriptor and registry data types
//! - snapshot DTOs for the on-disk registry format
//! - stable string IDs, sentinels, and whitelists

#![forbid(unsafe_code)]

pub mod app;
pub mod descriptor;
pub mod event;
pub mod ids;
pub mod plugin;
pub mod snapshot;

pub use app::AppInfo;
pub use descriptor::{Coordinate, DependencyDescriptor};
pub use event::EventCategory;
pub use plugin::{PluginDescriptor, PluginType};
pub use snapshot::RegistrySnapshot;
