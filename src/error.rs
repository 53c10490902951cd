//! Error types for the caesarbreak library.
//!
//! The cipher, scoring and search path is total and never fails. Errors only
//! arise at the configuration boundary: building frequency tables, parsing
//! option names, and validating CLI or simulation input.

use thiserror::Error;

/// Errors produced by the caesarbreak library.
#[derive(Debug, Error)]
pub enum CaesarError {
    /// The ciphertext handed to the analyzer front-end is missing or empty.
    #[error("Ciphertext must not be empty")]
    EmptyInput,
    /// A frequency-table key is not one of the symbols `A..=Z`.
    #[error("Symbol '{0}' is not part of the A-Z alphabet")]
    UnknownSymbol(char),
    /// A frequency-table value is negative, NaN or infinite.
    #[error("Frequency for '{symbol}' must be finite and non-negative, got {value}")]
    InvalidFrequency {
        /// The offending symbol, uppercased.
        symbol: char,
        /// The rejected value.
        value: f64,
    },
    /// A language name that has no built-in table.
    #[error("Unknown language '{0}' (expected 'english' or 'spanish')")]
    UnknownLanguage(String),
    /// A scoring metric name that is not recognised.
    #[error("Unknown scoring metric '{0}' (expected 'squared' or 'absolute')")]
    UnknownMetric(String),
    /// Simulation parameters that cannot produce any trial.
    #[error("Invalid simulation parameters: {0}")]
    InvalidSimulation(String),
    /// A frequency table file is not a valid JSON letter map.
    #[error("Failed to parse frequency table: {0}")]
    TableParse(#[from] serde_json::Error),
    /// A frequency table file could not be read.
    #[error("Failed to read frequency table: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_input() {
        let err = CaesarError::EmptyInput;
        assert_eq!(format!("{}", err), "Ciphertext must not be empty");
    }

    #[test]
    fn test_display_unknown_symbol() {
        let err = CaesarError::UnknownSymbol('Ñ');
        assert_eq!(
            format!("{}", err),
            "Symbol 'Ñ' is not part of the A-Z alphabet"
        );
    }

    #[test]
    fn test_display_invalid_frequency() {
        let err = CaesarError::InvalidFrequency {
            symbol: 'Q',
            value: -0.5,
        };
        assert_eq!(
            format!("{}", err),
            "Frequency for 'Q' must be finite and non-negative, got -0.5"
        );
    }

    #[test]
    fn test_display_unknown_language() {
        let err = CaesarError::UnknownLanguage("klingon".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown language 'klingon' (expected 'english' or 'spanish')"
        );
    }

    #[test]
    fn test_display_unknown_metric() {
        let err = CaesarError::UnknownMetric("cosine".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown scoring metric 'cosine' (expected 'squared' or 'absolute')"
        );
    }

    #[test]
    fn test_display_invalid_simulation() {
        let err = CaesarError::InvalidSimulation("trials must be at least 1".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid simulation parameters: trials must be at least 1"
        );
    }

    #[test]
    fn test_table_parse_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CaesarError = parse_err.into();
        assert!(matches!(err, CaesarError::TableParse(_)));
        assert!(format!("{}", err).starts_with("Failed to parse frequency table: "));
    }

    #[test]
    fn test_io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CaesarError = io_err.into();
        assert_eq!(format!("{}", err), "Failed to read frequency table: missing");
    }
}
