//! Submodule defining the errors used across the crate.
//!
//! Only file-level failures are errors. Problems with individual rows are
//! absorbed where they occur, see [`RowSkip`](crate::records::RowSkip).

use std::io;
use std::path::PathBuf;

/// Fatal errors that stop an extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dump file could not be opened.
    #[error("Cannot open dump file {}: {source}", .path.display())]
    OpenInput {
        /// Path of the dump file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Reading a line of the dump failed, e.g. because it is not UTF-8.
    #[error("Cannot read line {line} of dump file {}: {source}", .path.display())]
    ReadInput {
        /// Path of the dump file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// An output file could not be created.
    #[error("Cannot create output file {}: {source}", .path.display())]
    CreateOutput {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing to an output file failed.
    #[error("Cannot write output file {}: {source}", .path.display())]
    WriteOutput {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}
