//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: collect → render → emit for one path
//! - [`dto`]: data transfer objects for the use case boundary
//!
//! Use cases depend on the domain and the ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{GenerateReportOutput, GenerateReportRequest};
pub use orchestrator::GenerateReport;
