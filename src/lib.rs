//! Brute-force cryptanalysis of the Caesar shift cipher.
//!
//! A Caesar cipher moves every letter a fixed number of places along the
//! alphabet. With only 26 possible keys, the cipher is broken by trying each
//! key and keeping the decryption whose letter frequencies are closest to a
//! reference language.
//!
//! Every search also counts the elementary operations it performs, which
//! makes the linear cost in the text length observable.
//!
//! # Architecture
//!
//! ```text
//! alphabet     (A..=Z, symbol <-> index)
//!     ↓
//! shift_codec  (modular shift, encode/decode)      frequency (expected tables)
//!     ↓                                               ↓
//! key_search   (26 shifts, strict minimum)  <---  scorer (histogram + metric)
//!     ↓
//! Analyzer     (configured front-end)  --->  simulation / report
//! ```
//!
//! # Examples
//!
//! Encrypt a message and recover its key:
//!
//! ```
//! use caesarbreak::{analyze_ciphertext, encode};
//!
//! let cipher = encode("Attack the east wall at dawn", 7);
//! assert_eq!(cipher, "HAAHJR AOL LHZA DHSS HA KHDU");
//!
//! let analysis = analyze_ciphertext(&cipher);
//! assert_eq!(analysis.best_shift, 7);
//! assert_eq!(analysis.best_plaintext, "ATTACK THE EAST WALL AT DAWN");
//! assert_eq!(analysis.total_operations, 26 * (1 + 28 + 26));
//! ```
//!
//! Use another language table and metric:
//!
//! ```
//! use caesarbreak::config::{AnalyzerConfig, Language};
//! use caesarbreak::scorer::Metric;
//! use caesarbreak::{encode, Analyzer};
//!
//! let analyzer = Analyzer::new(
//!     AnalyzerConfig::default()
//!         .with_language(Language::Spanish)
//!         .with_metric(Metric::AbsoluteError),
//! );
//! let analysis = analyzer.analyze(&encode("ESTEESUNTEXTOMUYLARGOENLENGUAJECASCASTELLANO", 5));
//! assert_eq!(analysis.best_shift, 5);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod frequency;
pub mod key_search;
pub mod op_counter;
pub mod report;
pub mod scorer;
pub mod shift_codec;
pub mod simulation;

mod analyzer;

pub use analyzer::Analyzer;
pub use key_search::Analysis;

/// Encodes `text` with key `shift`. See [`shift_codec::encode`].
pub fn encode(text: &str, shift: i64) -> String {
    shift_codec::encode(text, shift)
}

/// Recovers the most probable key of `cipher_text` with the default
/// configuration: English frequencies, squared-error scoring.
pub fn analyze_ciphertext(cipher_text: &str) -> Analysis {
    Analyzer::default().analyze(cipher_text)
}
