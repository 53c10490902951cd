//! Analyzer: configured front-end over the key search.
//!
//! Wires an [`AnalyzerConfig`] into a [`FrequencyScorer`] and a
//! [`KeySearch`], and chooses the sequential or parallel search.

use log::info;

use crate::config::AnalyzerConfig;
use crate::error::CaesarError;
use crate::key_search::{Analysis, KeySearch};
use crate::scorer::FrequencyScorer;

/// Caesar cipher breaker built from an [`AnalyzerConfig`].
///
/// # Examples
///
/// ```
/// use caesarbreak::config::{AnalyzerConfig, Language};
/// use caesarbreak::{encode, Analyzer};
///
/// let plain = "ESTEESUNTEXTOMUYLARGOENLENGUAJECASCASTELLANO";
/// let analyzer = Analyzer::new(AnalyzerConfig::default().with_language(Language::Spanish));
/// let analysis = analyzer.analyze(&encode(plain, 5));
/// assert_eq!(analysis.best_shift, 5);
/// assert_eq!(analysis.best_plaintext, plain);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    search: KeySearch<FrequencyScorer>,
    parallel: bool,
}

impl Analyzer {
    /// Creates an analyzer from `config`.
    pub fn new(config: AnalyzerConfig) -> Self {
        let scorer = FrequencyScorer::new(config.table, config.metric);
        Analyzer {
            search: KeySearch::new(scorer),
            parallel: config.parallel,
        }
    }

    /// The scorer candidates are ranked with.
    pub fn scorer(&self) -> &FrequencyScorer {
        self.search.scorer()
    }

    /// Recovers the most probable key of `cipher_text`.
    ///
    /// Total over all input; see [`KeySearch::search`].
    pub fn analyze(&self, cipher_text: &str) -> Analysis {
        if self.parallel {
            self.search.search_parallel(cipher_text)
        } else {
            self.search.search(cipher_text)
        }
    }

    /// Like [`analyze`](Self::analyze), but rejects empty or whitespace-only
    /// input the way the command-line front-end does.
    ///
    /// # Errors
    /// Returns [`CaesarError::EmptyInput`] if `cipher_text` is blank.
    pub fn analyze_input(&self, cipher_text: &str) -> Result<Analysis, CaesarError> {
        if cipher_text.trim().is_empty() {
            return Err(CaesarError::EmptyInput);
        }
        let analysis = self.analyze(cipher_text);
        info!(
            "recovered shift {} from {} chars ({} ops, metric {})",
            analysis.best_shift,
            cipher_text.chars().count(),
            analysis.total_operations,
            self.scorer().metric()
        );
        Ok(analysis)
    }
}
