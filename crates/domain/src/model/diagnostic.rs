use std::fmt;

use serde::{Deserialize, Serialize};

/// Soft note attached to a report. Never a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Diagnostic {
    /// The host platform is not recognised, so no creation timestamp is reported.
    UnsupportedPlatform { platform: String },
    /// The platform normally exposes birth time but this filesystem refused it.
    CreationTimeUnavailable { reason: String },
    /// The host has no POSIX mode bits; the mode was derived from the read-only flag.
    SyntheticMode,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform { platform } => write!(
                f,
                "Unsupported platform '{platform}' detected; cannot interpret creation/change timestamp"
            ),
            Self::CreationTimeUnavailable { reason } => {
                write!(f, "Creation time unavailable: {reason}")
            }
            Self::SyntheticMode => {
                f.write_str("Mode synthesized from the read-only flag; inode, device and owner ids unavailable")
            }
        }
    }
}
