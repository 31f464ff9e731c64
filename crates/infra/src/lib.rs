// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod output;
pub mod persistence;
pub mod platform;

pub use filesystem::StatMetadataSource;
pub use output::{ConsoleEcho, ConsoleReportSink, FileReportSink};
pub use platform::HostPlatform;
