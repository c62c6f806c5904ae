//! Host adapters: live process state and file-backed manifest lookup.
//!
//! This is the only I/O layer besides the CLI. Everything here produces
//! the same plain maps and traits the domain layer consumes, so reports
//! built from live state and reports built from snapshots go through
//! identical code paths.

#![forbid(unsafe_code)]

mod manifest;
mod process;
mod toolchain;

pub use manifest::{DirManifestLookup, ManifestError};
pub use process::{environment, properties};
pub use toolchain::toolchain_miscellany;
