//! # metastat core
//!
//! The two pure operations behind the `metastat` tool:
//!
//! - [`collect`]: one stat observation of a path, as an immutable [`MetadataReport`]
//! - [`render`] / [`render_with`]: a report as Table, Annotated or Plain text
//!
//! [`bootstrap`] wires them to the report file and the console.

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

use std::{path::Path, sync::OnceLock};

pub mod bootstrap;
pub mod error;
pub mod presentation;

pub use metastat_domain::{
    CreationTime, CreationTimeSource, CreationTimeSupport, Diagnostic, EntryKind, MetadataReport, RenderOptions,
    RenderStyle, StatSnapshot,
};
pub use metastat_infra::{ConsoleEcho, HostPlatform, StatMetadataSource};
use metastat_ports::metadata::MetadataSource;
pub use presentation::{TextRenderer, console_lines, render, render_with};

use crate::error::CollectionResult;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collector for the current host; the platform capability query runs once per process.
pub fn host_source() -> &'static StatMetadataSource {
    static SOURCE: OnceLock<StatMetadataSource> = OnceLock::new();
    SOURCE.get_or_init(StatMetadataSource::new)
}

/// Observes `path` once without following symlinks.
///
/// Fails with `CollectionError::NotFound` when nothing exists at `path` and
/// with `CollectionError::AccessDenied` when the stat call is refused.
pub fn collect(path: impl AsRef<Path>) -> CollectionResult<MetadataReport> {
    host_source().collect(path.as_ref())
}
