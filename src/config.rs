//! Analyzer configuration: reference language, scoring metric and table source.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::CaesarError;
use crate::frequency::FrequencyTable;
use crate::scorer::Metric;

/// Languages with a built-in frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    /// English table.
    #[default]
    #[value(alias = "en")]
    English,
    /// Spanish table.
    #[value(alias = "es", alias = "espanol", alias = "español")]
    Spanish,
}

impl Language {
    /// The built-in table for this language.
    pub fn table(self) -> FrequencyTable {
        match self {
            Language::English => FrequencyTable::english(),
            Language::Spanish => FrequencyTable::spanish(),
        }
    }

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CaesarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" | "espanol" | "español" => Ok(Language::Spanish),
            _ => Err(CaesarError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Everything an [`Analyzer`](crate::Analyzer) needs to rank candidates.
///
/// The default is the English table with squared-error scoring.
///
/// # Examples
///
/// ```
/// use caesarbreak::config::{AnalyzerConfig, Language};
/// use caesarbreak::scorer::Metric;
///
/// let config = AnalyzerConfig::default()
///     .with_language(Language::Spanish)
///     .with_metric(Metric::AbsoluteError);
/// assert_eq!(config.metric, Metric::AbsoluteError);
/// assert_eq!(config.table.expected('E'), 0.1368);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Expected letter frequencies.
    pub table: FrequencyTable,
    /// Distance metric.
    pub metric: Metric,
    /// Score the 26 shifts on the rayon pool.
    pub parallel: bool,
}

impl AnalyzerConfig {
    /// Replaces the table with the built-in table of `language`.
    pub fn with_language(mut self, language: Language) -> Self {
        self.table = language.table();
        self
    }

    /// Replaces the table.
    pub fn with_table(mut self, table: FrequencyTable) -> Self {
        self.table = table;
        self
    }

    /// Replaces the table with one loaded from a JSON file.
    ///
    /// # Errors
    /// Any error of [`FrequencyTable::from_json_file`].
    pub fn with_table_file(self, path: impl AsRef<Path>) -> Result<Self, CaesarError> {
        let table = FrequencyTable::from_json_file(path)?;
        Ok(self.with_table(table))
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables or disables the parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
