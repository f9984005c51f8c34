//! The extraction run: dump lines in, two CSV files out.
//!
//! ```text
//! line ─► parse_statement ─► ValueTokenizer ─► map_row ─► Extraction ─► write_table_file
//! ```
//!
//! All records are kept in memory until the whole dump has been read, and
//! both output files list records in the order they appear in the dump.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ExtractConfig;
use crate::errors::Error;
use crate::records::{
    BreederRecord, Record, RowSkip, SourceTable, StrainRecord, is_supported, map_row,
};
use crate::sql::{INSERT_PREFIX, Value, ValueTokenizer, parse_statement};
use crate::writer::write_table_file;

/// Counters describing an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Lines read from the dump.
    pub lines: usize,
    /// `INSERT` statements of a supported table.
    pub statements: usize,
    /// Extracted breeders.
    pub breeders: usize,
    /// Extracted strains.
    pub strains: usize,
    /// Rows of a supported table dropped for having too few values.
    pub skipped_rows: usize,
    /// `INSERT` statements of tables that are not extracted.
    pub unknown_tables: usize,
    /// Value lists that ended inside quotes or braces.
    pub unbalanced_rows: usize,
    /// Timestamps replaced by the time of extraction.
    pub timestamp_fallbacks: usize,
    /// Strains with a known flowering time.
    pub strains_with_flowering_days: usize,
}

/// Records collected from a dump, in dump order.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Extracted breeders.
    pub breeders: Vec<BreederRecord>,
    /// Extracted strains.
    pub strains: Vec<StrainRecord>,
    summary: ExtractSummary,
}

impl Extraction {
    /// Create an empty extraction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every line of a dump.
    ///
    /// `source` is only used in error messages. A progress message is
    /// logged every `progress_interval` lines unless it is `0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadInput`] if a line cannot be read.
    pub fn read<R: BufRead>(
        reader: R,
        source: &Path,
        progress_interval: usize,
    ) -> Result<Self, Error> {
        let mut extraction = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            if progress_interval != 0 && line_number % progress_interval == 0 {
                tracing::info!("Processed {line_number} lines...");
            }
            let line = line.map_err(|source_err| Error::ReadInput {
                path: source.to_path_buf(),
                line: line_number,
                source: source_err,
            })?;
            extraction.push_line(&line);
        }
        Ok(extraction)
    }

    /// Process a single dump line.
    ///
    /// Lines that are not an `INSERT` of a supported table, and rows with
    /// too few values, are counted and otherwise ignored.
    pub fn push_line(&mut self, line: &str) {
        self.summary.lines += 1;
        let line_number = self.summary.lines;

        let line = line.trim();
        if !line.starts_with(INSERT_PREFIX) {
            return;
        }
        let Some(statement) = parse_statement(line) else {
            tracing::debug!(line = line_number, "Skipping malformed INSERT statement");
            return;
        };
        if !is_supported(statement.table) {
            self.summary.unknown_tables += 1;
            return;
        }
        self.summary.statements += 1;

        let mut tokenizer = ValueTokenizer::new(statement.values);
        let values: Vec<Value> = tokenizer.by_ref().collect();
        if !tokenizer.is_balanced() {
            self.summary.unbalanced_rows += 1;
            tracing::debug!(
                line = line_number,
                table = statement.table,
                "Value list ends inside quotes or braces"
            );
        }

        match map_row(statement.table, &values) {
            Ok(record) => self.push_record(record, line_number),
            Err(RowSkip::UnknownTable) => self.summary.unknown_tables += 1,
            Err(skip @ RowSkip::TooFewValues { .. }) => {
                self.summary.skipped_rows += 1;
                tracing::debug!(line = line_number, "Skipping row: {skip}");
            }
        }
    }

    fn push_record(&mut self, record: Record, line_number: usize) {
        let fallbacks = record
            .timestamps()
            .iter()
            .filter(|ts| ts.is_fallback())
            .count();
        if fallbacks > 0 {
            self.summary.timestamp_fallbacks += fallbacks;
            tracing::debug!(
                line = line_number,
                "Replaced {fallbacks} unparsable timestamp(s) with the current time"
            );
        }

        match record {
            Record::Breeder(breeder) => self.breeders.push(breeder),
            Record::Strain(strain) => {
                if strain.flowering_days.is_some() {
                    self.summary.strains_with_flowering_days += 1;
                }
                self.strains.push(strain);
            }
        }
    }

    /// Counters of the extraction so far.
    #[must_use]
    pub fn summary(&self) -> ExtractSummary {
        ExtractSummary {
            breeders: self.breeders.len(),
            strains: self.strains.len(),
            ..self.summary
        }
    }

    /// Write both CSV files.
    ///
    /// # Errors
    ///
    /// Returns an error if an output file cannot be created or written.
    pub fn write(&self, config: &ExtractConfig) -> Result<(), Error> {
        tracing::info!("Writing {}...", config.breeders_output.display());
        write_table_file(&config.breeders_output, &self.breeders)?;
        tracing::info!("Writing {}...", config.strains_output.display());
        write_table_file(&config.strains_output, &self.strains)?;
        Ok(())
    }
}

/// Extract breeders and strains from `config.input` and write them to the
/// configured CSV files.
///
/// # Errors
///
/// Returns an error if the dump cannot be opened or read, or if an output
/// file cannot be created or written. Problems with single rows never fail
/// the run.
pub fn run(config: &ExtractConfig) -> Result<ExtractSummary, Error> {
    let file = File::open(&config.input).map_err(|source| Error::OpenInput {
        path: config.input.clone(),
        source,
    })?;

    tracing::info!("Processing SQLite dump file {}...", config.input.display());
    let extraction = Extraction::read(
        BufReader::new(file),
        &config.input,
        config.progress_interval,
    )?;
    let summary = extraction.summary();
    tracing::info!(
        "Extracted {} {} and {} {}",
        summary.breeders,
        BreederRecord::TABLE,
        summary.strains,
        StrainRecord::TABLE
    );

    extraction.write(config)?;
    Ok(summary)
}
