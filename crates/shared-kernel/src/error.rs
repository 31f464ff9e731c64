// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MetastatError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MetastatError>,
    },

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl MetastatError {
    /// Returns the collection failure at the root of this error, looking through context wrappers.
    pub fn collection(&self) -> Option<&CollectionError> {
        match self {
            Self::Context { source, .. } => source.collection(),
            Self::Collection(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetastatError>;

/// Failures of the single stat observation behind a report.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The path did not exist at the moment of collection.
    #[error("File '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied while reading metadata of '{}': {source}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat '{}': {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectionError {
    /// Classifies an `io::Error` returned by the stat call.
    ///
    /// A path running through a regular file (`file.txt/child`) fails with
    /// `ENOTDIR`; nothing exists there, so it is `NotFound` as well.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::Stat { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::AccessDenied { path, .. } | Self::Stat { path, .. } => path,
        }
    }
}

pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for MetastatError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MetastatError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MetastatError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MetastatError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MetastatError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
