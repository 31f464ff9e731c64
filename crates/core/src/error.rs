//! Re-export error types from the shared kernel crate.

pub use metastat_shared_kernel::{
    CollectionError, CollectionResult, ErrorContext, InfraResult, InfrastructureError, MetastatError,
    PresentationError, PresentationResult, Result,
};
