//! Command-line front end of `metastat`.
//!
//! Parses arguments into a [`config::Config`], sets up logging and hands a
//! [`metastat_core::bootstrap::ReportPlan`] to the core.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use metastat_core::VERSION;
