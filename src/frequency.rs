//! Expected letter-frequency tables.
//!
//! A [`FrequencyTable`] maps each symbol of `A..=Z` to its expected relative
//! frequency in some language. Tables are immutable values: the scorer
//! receives one at construction, so alternative languages can be swapped in
//! without touching global state.
//!
//! Values come from empirical corpora and need not sum to exactly 1.0. Rare
//! letters may be 0.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::alphabet::{self, ALPHABET_SIZE, SYMBOLS};
use crate::error::CaesarError;

/// English letter frequencies, `A..=Z`.
const ENGLISH: [f64; ALPHABET_SIZE] = [
    0.0817, 0.0149, 0.0278, 0.0425, 0.1270, 0.0223, 0.0202, 0.0609, 0.0697, 0.0015, 0.0077,
    0.0403, 0.0241, 0.0675, 0.0751, 0.0193, 0.0009, 0.0599, 0.0633, 0.0906, 0.0276, 0.0098,
    0.0236, 0.0015, 0.0197, 0.0007,
];

/// Spanish letter frequencies, `A..=Z`. `Ñ` is outside the alphabet; `K`
/// and `W` are effectively absent.
const SPANISH: [f64; ALPHABET_SIZE] = [
    0.1253, 0.0142, 0.0468, 0.0586, 0.1368, 0.0069, 0.0101, 0.0070, 0.0625, 0.0044, 0.0000,
    0.0497, 0.0315, 0.0671, 0.0868, 0.0251, 0.0088, 0.0687, 0.0798, 0.0463, 0.0393, 0.0090,
    0.0000, 0.0022, 0.0090, 0.0052,
];

/// On-disk form of a table: a JSON object of single-letter keys.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct TableFile(BTreeMap<char, f64>);

/// Immutable table of expected relative frequencies for `A..=Z`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    freqs: [f64; ALPHABET_SIZE],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}

impl FrequencyTable {
    /// Built-in English table.
    pub fn english() -> Self {
        FrequencyTable { freqs: ENGLISH }
    }

    /// Built-in Spanish table.
    pub fn spanish() -> Self {
        FrequencyTable { freqs: SPANISH }
    }

    /// Builds a table from `(symbol, frequency)` pairs.
    ///
    /// Lowercase ASCII symbols are accepted and folded to uppercase. Symbols
    /// that never appear get frequency 0. A symbol given twice keeps the
    /// last value.
    ///
    /// # Errors
    /// - [`CaesarError::UnknownSymbol`] if a symbol is not a letter `A..=Z`.
    /// - [`CaesarError::InvalidFrequency`] if a value is negative, NaN or
    ///   infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarbreak::frequency::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_pairs([('a', 0.5), ('B', 0.5)]).unwrap();
    /// assert_eq!(table.expected('A'), 0.5);
    /// assert_eq!(table.expected('C'), 0.0);
    ///
    /// assert!(FrequencyTable::from_pairs([('?', 0.1)]).is_err());
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CaesarError>
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        let mut freqs = [0.0; ALPHABET_SIZE];
        for (symbol, value) in pairs {
            let upper = symbol.to_ascii_uppercase();
            let index = alphabet::index_of(upper).ok_or(CaesarError::UnknownSymbol(symbol))?;
            if !value.is_finite() || value < 0.0 {
                return Err(CaesarError::InvalidFrequency {
                    symbol: upper,
                    value,
                });
            }
            freqs[index] = value;
        }
        Ok(FrequencyTable { freqs })
    }

    /// Parses a table from a JSON object such as `{"A": 0.08, "B": 0.015}`.
    ///
    /// # Errors
    /// [`CaesarError::TableParse`] for malformed JSON or keys that are not
    /// single characters, plus the validation errors of
    /// [`from_pairs`](Self::from_pairs).
    pub fn from_json_str(json: &str) -> Result<Self, CaesarError> {
        let TableFile(entries) = serde_json::from_str(json)?;
        Self::from_pairs(entries)
    }

    /// Reads and parses a JSON table file. See [`from_json_str`](Self::from_json_str).
    ///
    /// # Errors
    /// [`CaesarError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CaesarError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Expected frequency of `symbol`, or 0 for symbols outside the alphabet.
    pub fn expected(&self, symbol: char) -> f64 {
        alphabet::index_of(symbol).map_or(0.0, |i| self.freqs[i])
    }

    /// Expected frequency of the symbol at `index`, or 0 when out of range.
    pub fn expected_at(&self, index: usize) -> f64 {
        self.freqs.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of all expected frequencies.
    pub fn total(&self) -> f64 {
        self.freqs.iter().sum()
    }

    /// Iterates `(symbol, frequency)` in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        SYMBOLS.iter().copied().zip(self.freqs.iter().copied())
    }
}
