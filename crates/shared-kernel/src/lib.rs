// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CollectionError, CollectionResult, ErrorContext, InfraResult, InfrastructureError, MetastatError,
    PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{FileMode, FileName, FilePath, FileSize, Timestamp};
