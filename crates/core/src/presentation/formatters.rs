// crates/core/src/presentation/formatters.rs
pub mod annotated;
pub mod plain;
pub mod table;

pub use annotated::output_annotated;
pub use plain::output_plain;
pub use table::output_table;
