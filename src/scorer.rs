//! Frequency scoring of candidate plaintexts.
//!
//! A candidate is scored by building its letter histogram in one linear pass
//! and then comparing the observed relative frequencies against a
//! [`FrequencyTable`] in a fixed 26-step pass. Lower scores are closer to the
//! reference language.
//!
//! Every scoring pass also reports how many elementary operations it cost:
//! one per character scanned plus one per alphabet symbol compared.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::CaesarError;
use crate::frequency::FrequencyTable;
use crate::op_counter::OpCounter;

/// Score assigned to text that contains no alphabet symbols at all.
pub const SENTINEL_SCORE: f64 = 1e9;

/// Distance between the observed and expected distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Metric {
    /// Sum of squared differences.
    #[default]
    #[value(name = "squared", alias = "squared-error", alias = "sse")]
    SquaredError,
    /// Sum of absolute differences.
    #[value(name = "absolute", alias = "absolute-error", alias = "sae")]
    AbsoluteError,
}

impl Metric {
    fn term(self, observed: f64, expected: f64) -> f64 {
        let diff = observed - expected;
        match self {
            Metric::SquaredError => diff * diff,
            Metric::AbsoluteError => diff.abs(),
        }
    }

    /// Short name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Metric::SquaredError => "squared",
            Metric::AbsoluteError => "absolute",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = CaesarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "squared" | "squared-error" | "sse" => Ok(Metric::SquaredError),
            "absolute" | "absolute-error" | "sae" => Ok(Metric::AbsoluteError),
            _ => Err(CaesarError::UnknownMetric(s.to_string())),
        }
    }
}

/// Result of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Distance to the expected distribution; lower is better.
    pub value: f64,
    /// Elementary operations spent computing `value`.
    pub operations: u64,
}

/// Ranks candidate plaintexts for the key search.
///
/// Implementations must be pure: the same text always yields the same score.
pub trait Scorer: Sync {
    /// Scores `text`.
    fn score(&self, text: &str) -> Score;
}

/// Scores text against an expected [`FrequencyTable`] with a fixed [`Metric`].
#[derive(Debug, Clone, Default)]
pub struct FrequencyScorer {
    table: FrequencyTable,
    metric: Metric,
}

impl FrequencyScorer {
    /// Creates a scorer over `table` using `metric`.
    pub fn new(table: FrequencyTable, metric: Metric) -> Self {
        FrequencyScorer { table, metric }
    }

    /// The reference table.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// The distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl Scorer for FrequencyScorer {
    /// Scores `text` against the reference table.
    ///
    /// The text is uppercased, then scanned once. When it has at least one
    /// letter, `operations == text.to_uppercase().chars().count() + 26`.
    /// Text with no letters scores [`SENTINEL_SCORE`] and only the scan is
    /// charged.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarbreak::scorer::{FrequencyScorer, Scorer, SENTINEL_SCORE};
    ///
    /// let scorer = FrequencyScorer::default();
    /// let score = scorer.score("Hello, world");
    /// assert_eq!(score.operations, 12 + 26);
    ///
    /// let empty = scorer.score("12345");
    /// assert_eq!(empty.value, SENTINEL_SCORE);
    /// assert_eq!(empty.operations, 5);
    /// ```
    fn score(&self, text: &str) -> Score {
        let mut ops = OpCounter::new();
        let mut counts = [0u64; ALPHABET_SIZE];
        let mut letters = 0u64;

        for c in text.to_uppercase().chars() {
            ops.tick();
            if let Some(index) = alphabet::index_of(c) {
                counts[index] += 1;
                letters += 1;
            }
        }

        if letters == 0 {
            return Score {
                value: SENTINEL_SCORE,
                operations: ops.total(),
            };
        }

        let mut value = 0.0;
        for (index, &count) in counts.iter().enumerate() {
            ops.tick();
            let observed = count as f64 / letters as f64;
            value += self.metric.term(observed, self.table.expected_at(index));
        }

        Score {
            value,
            operations: ops.total(),
        }
    }
}
