#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;

pub use model::{CreationTime, CreationTimeSource, CreationTimeSupport, Diagnostic, EntryKind, MetadataReport, StatSnapshot};
pub use options::{RenderOptions, RenderStyle};
