//! Pure aggregation logic over registry snapshots.
//!
//! Everything in this crate is synchronous and side-effect free: the
//! registries are read through capability traits, and each operation
//! produces plain data for the render layer. No I/O happens here.

#![forbid(unsafe_code)]

mod clash;
mod plugins;
mod progress;
mod registries;
mod source_ref;
mod subscribers;

pub use clash::{detect_clashes, ClashReport};
pub use plugins::{summarize, PluginTypeGroup};
pub use progress::{NullProgress, ProgressSink};
pub use registries::{
    DependencySource, ManifestLookup, PluginRegistry, StaticManifests, SubscriberRegistry,
};
pub use source_ref::resolve_source_ref;
pub use subscribers::{inspect, CategorySubscribers};
