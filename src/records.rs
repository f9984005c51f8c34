//! Target records and the positional mapping from dump rows onto them.
//!
//! Each supported source table is described by a [`SourceTable`]
//! implementation that knows the table name, the minimum number of values a
//! row must carry, the CSV header of the target file and how to pick the
//! target fields out of a row.

mod breeder;
mod strain;

pub use breeder::BreederRecord;
pub use strain::StrainRecord;

use serde::Serialize;

use crate::datetime::Timestamp;
use crate::sql::Value;

/// A source table of the dump together with the record it is mapped onto.
pub trait SourceTable: Serialize + Sized {
    /// The table name as it appears in `INSERT INTO <name>`.
    const TABLE: &'static str;

    /// Rows with fewer values are skipped.
    const MIN_VALUES: usize;

    /// Header of the target CSV file, in serialization order.
    const COLUMNS: &'static [&'static str];

    /// Build the record from a row.
    ///
    /// Use [`Self::from_row`] for rows whose length is not checked yet.
    ///
    /// # Panics
    ///
    /// Panics if `values` has fewer than [`Self::MIN_VALUES`] entries.
    fn from_values(values: &[Value]) -> Self;

    /// The normalized timestamps of the record.
    fn timestamps(&self) -> [Timestamp; 2];

    /// Build the record if the row is long enough.
    ///
    /// # Errors
    ///
    /// Returns [`RowSkip::TooFewValues`] when the row is shorter than
    /// [`Self::MIN_VALUES`].
    fn from_row(values: &[Value]) -> Result<Self, RowSkip> {
        if values.len() < Self::MIN_VALUES {
            return Err(RowSkip::TooFewValues {
                table: Self::TABLE,
                found: values.len(),
                required: Self::MIN_VALUES,
            });
        }
        Ok(Self::from_values(values))
    }
}

/// A mapped row of one of the supported tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A row of `breeders`.
    Breeder(BreederRecord),
    /// A row of `strains`.
    Strain(StrainRecord),
}

impl Record {
    /// The normalized timestamps of the record.
    #[must_use]
    pub fn timestamps(&self) -> [Timestamp; 2] {
        match self {
            Self::Breeder(breeder) => breeder.timestamps(),
            Self::Strain(strain) => strain.timestamps(),
        }
    }
}

/// Why a row was not turned into a record.
///
/// None of these stop an extraction: the row is dropped and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RowSkip {
    /// The table is not one of the supported source tables.
    #[error("Table is not extracted")]
    UnknownTable,
    /// The row has fewer values than the table needs.
    #[error("Row of {table} has {found} values, at least {required} are needed")]
    TooFewValues {
        /// The source table.
        table: &'static str,
        /// Number of values in the row.
        found: usize,
        /// Minimum number of values for the table.
        required: usize,
    },
}

/// Map a tokenized row of the given table onto its record.
///
/// # Errors
///
/// Returns a [`RowSkip`] when the table is not supported or the row is too
/// short.
pub fn map_row(table: &str, values: &[Value]) -> Result<Record, RowSkip> {
    if table == BreederRecord::TABLE {
        BreederRecord::from_row(values).map(Record::Breeder)
    } else if table == StrainRecord::TABLE {
        StrainRecord::from_row(values).map(Record::Strain)
    } else {
        Err(RowSkip::UnknownTable)
    }
}

/// Whether rows of `table` are extracted.
#[must_use]
pub fn is_supported(table: &str) -> bool {
    table == BreederRecord::TABLE || table == StrainRecord::TABLE
}

/// Owned text of the value at `idx`, `None` for `NULL`.
fn text_at(values: &[Value], idx: usize) -> Option<String> {
    values[idx].as_text().map(String::from)
}
