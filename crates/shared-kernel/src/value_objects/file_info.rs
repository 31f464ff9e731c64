// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Absolute path of an observed entry. Never resolved through symlinks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// Final path segment, or an empty name for roots such as `/`.
    pub fn file_name(&self) -> FileName {
        self.0
            .file_name()
            .map(|s| FileName::new(s.to_string_lossy().into_owned()))
            .unwrap_or_default()
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// UTF-8 file name used in titles and output file names.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name without its last extension (`report.tar.gz` -> `report.tar`).
    #[must_use]
    pub fn stem(&self) -> &str {
        match self.0.rfind('.') {
            Some(0) | None => &self.0,
            Some(idx) => &self.0[..idx],
        }
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name.to_string())
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Returns a base-2 human readable representation (KiB, MiB, GiB, TiB).
    pub fn to_human(self) -> String {
        const KIB: f64 = 1024.0;
        const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

        let bytes = self.bytes();
        if bytes < 1024 {
            return format!("{bytes} B");
        }

        let mut value = bytes as f64 / KIB;
        let mut unit = 0;
        while value >= KIB && unit < UNITS.len() - 1 {
            value /= KIB;
            unit += 1;
        }
        format!("{value:.1} {}", UNITS[unit])
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local wall-clock instant taken from a stat observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    pub const DISPLAY_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    /// Builds a timestamp from seconds and nanoseconds since the Unix epoch.
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn from_unix(secs: i64, nanos: i64) -> Option<Self> {
        let nanos = u32::try_from(nanos).ok()?;
        DateTime::from_timestamp(secs, nanos).map(|utc| Self(utc.with_timezone(&Local)))
    }

    pub fn now() -> Self {
        Self(Local::now())
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.0
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<std::time::SystemTime> for Timestamp {
    fn from(time: std::time::SystemTime) -> Self {
        Self(DateTime::<Local>::from(time))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DISPLAY_FORMAT))
    }
}
