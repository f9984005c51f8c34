//! Paths and knobs of an extraction run.

use std::path::PathBuf;

/// Default location of the SQLite dump.
pub const DEFAULT_INPUT: &str = "export.sql";

/// Default location of the breeders CSV.
pub const DEFAULT_BREEDERS_OUTPUT: &str = "breeders.csv";

/// Default location of the strains CSV.
pub const DEFAULT_STRAINS_OUTPUT: &str = "strains.csv";

/// Default number of lines between two progress messages.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 5000;

/// Configuration of a single extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// The SQLite text dump to read.
    pub input: PathBuf,
    /// Where the breeders CSV is written.
    pub breeders_output: PathBuf,
    /// Where the strains CSV is written.
    pub strains_output: PathBuf,
    /// Log progress every this many lines. `0` disables progress messages.
    pub progress_interval: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            breeders_output: DEFAULT_BREEDERS_OUTPUT.into(),
            strains_output: DEFAULT_STRAINS_OUTPUT.into(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ExtractConfig {
    /// Configuration reading `input` and writing both CSV files into
    /// `output_dir` under their default names.
    #[must_use]
    pub fn with_output_dir(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        Self {
            input: input.into(),
            breeders_output: output_dir.join(DEFAULT_BREEDERS_OUTPUT),
            strains_output: output_dir.join(DEFAULT_STRAINS_OUTPUT),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.input, Path::new("export.sql"));
        assert_eq!(config.breeders_output, Path::new("breeders.csv"));
        assert_eq!(config.strains_output, Path::new("strains.csv"));
        assert_eq!(config.progress_interval, 5000);
    }

    #[test]
    fn test_output_dir() {
        let config = ExtractConfig::with_output_dir("dumps/export.sql", "migrations");
        assert_eq!(config.input, Path::new("dumps/export.sql"));
        assert_eq!(config.breeders_output, Path::new("migrations/breeders.csv"));
        assert_eq!(config.strains_output, Path::new("migrations/strains.csv"));
    }
}
