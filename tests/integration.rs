//! Integration test suite for end-to-end scenarios.

#[path = "integration/end_to_end.rs"]
mod end_to_end;
#[path = "integration/output_styles.rs"]
mod output_styles;
