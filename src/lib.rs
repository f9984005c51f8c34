#![doc = include_str!("../README.md")]
#![deny(clippy::mod_module_files)]

pub mod config;
pub mod datetime;
pub mod errors;
pub mod extract;
pub mod pipeline;
pub mod records;
pub mod sql;
#[cfg(feature = "testing")]
pub mod testing;
pub mod writer;

// Re-export main types
pub use config::ExtractConfig;
pub use datetime::Timestamp;
pub use extract::{Potency, flowering_days};
pub use pipeline::{ExtractSummary, Extraction, run};
pub use records::{BreederRecord, Record, RowSkip, SourceTable, StrainRecord, map_row};
pub use sql::{Statement, Value, ValueTokenizer, parse_statement, parse_values};
pub use writer::{write_table, write_table_file};

// Re-export errors
pub use errors::Error;
