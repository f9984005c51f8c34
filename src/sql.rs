//! Line-oriented reader for the `INSERT INTO` statements of a SQLite text dump.
//!
//! This is intentionally not a SQL parser. The dump emits one statement per
//! line with the fixed shape
//!
//! ```text
//! INSERT INTO <table> VALUES(<value>,<value>,...);
//! ```
//!
//! and only two pieces are needed from it:
//! - [`parse_statement`] finds the table name and the raw value list,
//! - [`parse_values`] splits the raw value list into positional [`Value`]s.

mod statement;
mod values;

pub use statement::{INSERT_PREFIX, Statement, parse_statement};
pub use values::{Value, ValueTokenizer, parse_values};
