// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! Which timestamp stands in for "creation time" is decided here, once, from
//! the compilation target instead of by sniffing platform-name strings at
//! every call.

use metastat_domain::CreationTimeSupport;
use metastat_ports::metadata::PlatformCapabilities;

/// Capabilities of the host the binary was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    name: &'static str,
    creation_time: CreationTimeSupport,
}

impl HostPlatform {
    /// Resolves the capabilities of the current target.
    pub fn detect() -> Self {
        let name = std::env::consts::OS;
        Self { name, creation_time: creation_time_for(name) }
    }

    /// Host with an explicit creation-time capability, mainly for tests.
    pub fn with_creation_time(name: &'static str, creation_time: CreationTimeSupport) -> Self {
        Self { name, creation_time }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::detect()
    }
}

impl PlatformCapabilities for HostPlatform {
    fn creation_time(&self) -> CreationTimeSupport {
        self.creation_time.clone()
    }
}

/// Maps an OS name (as in `std::env::consts::OS`) to its creation-time capability.
///
/// Windows, macOS and the BSDs keep a birth time in every stat result. Linux
/// only has it through `statx` on some filesystems, so the POSIX family falls
/// back to `st_ctime`, reported as inode change time.
pub fn creation_time_for(os: &str) -> CreationTimeSupport {
    match os {
        "windows" | "macos" | "ios" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => {
            CreationTimeSupport::Birth
        }
        "linux" | "android" | "solaris" | "illumos" | "aix" | "haiku" | "hurd" | "nto" => {
            CreationTimeSupport::InodeChange
        }
        other => CreationTimeSupport::Unsupported { platform: other.to_string() },
    }
}
