use std::fmt;

use metastat_shared_kernel::Timestamp;
use serde::{Deserialize, Serialize};

/// Where the "creation" timestamp of a report actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationTimeSource {
    /// True birth time exposed by the platform.
    Birth,
    /// POSIX `st_ctime`: last inode change, not creation.
    InodeChange,
}

impl CreationTimeSource {
    /// Label that keeps inode change time from passing for creation time.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Birth => "Creation Time",
            Self::InodeChange => "Change Time (inode)",
        }
    }
}

/// Creation-like timestamp together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationTime {
    pub source: CreationTimeSource,
    pub at: Timestamp,
}

impl CreationTime {
    pub fn new(source: CreationTimeSource, at: Timestamp) -> Self {
        Self { source, at }
    }
}

/// Answer to "what kind of creation time does this host expose?".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CreationTimeSupport {
    Birth,
    InodeChange,
    Unsupported { platform: String },
}

impl CreationTimeSupport {
    pub fn source(&self) -> Option<CreationTimeSource> {
        match self {
            Self::Birth => Some(CreationTimeSource::Birth),
            Self::InodeChange => Some(CreationTimeSource::InodeChange),
            Self::Unsupported { .. } => None,
        }
    }
}

impl fmt::Display for CreationTimeSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Birth => f.write_str("birth time"),
            Self::InodeChange => f.write_str("inode change time"),
            Self::Unsupported { platform } => write!(f, "unsupported ({platform})"),
        }
    }
}
