//! TypeScript file generators.

mod index_ts;
mod table_ts;

pub use index_ts::{IndexTs, MANIFEST_FILE};
pub use table_ts::{GENERATED_HEADER, TableTs};

/// File name of a table's unit, relative to the output directory.
pub fn unit_file_name(table: &str) -> String {
    format!("{}.ts", table)
}
