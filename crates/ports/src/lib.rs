//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`metadata`]: stat-backed metadata collection and host capability queries
//! - [`rendering`]: turning a report into text
//! - [`output`]: destinations for rendered reports
//!
//! These ports keep the use case independent of the filesystem and the console.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod metadata;
pub mod output;
pub mod rendering;
