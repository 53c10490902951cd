//! KeySearch: brute-force recovery of a Caesar key.
//!
//! Every shift `0..26` is tried in increasing order. Each candidate is
//! decoded with the [`shift_codec`](crate::shift_codec), ranked by a
//! [`Scorer`], and the lowest score wins. On equal scores the earlier shift
//! is kept.
//!
//! The search charges one operation per shift plus whatever the scorer
//! reports, giving `26 * (1 + L + 26)` operations for a text of `L`
//! characters that contains at least one letter.

use log::{debug, trace};
use rayon::prelude::*;

use crate::alphabet::ALPHABET_SIZE;
use crate::op_counter::OpCounter;
use crate::scorer::{FrequencyScorer, Score, Scorer, SENTINEL_SCORE};
use crate::shift_codec;

/// Outcome of a key search.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Recovered key in `0..26`.
    pub best_shift: u8,
    /// Ciphertext decoded with `best_shift`.
    pub best_plaintext: String,
    /// Score of `best_plaintext`.
    pub best_score: f64,
    /// Operations charged across all 26 candidates.
    pub total_operations: u64,
    /// Score of every candidate, indexed by shift.
    pub per_shift_scores: [f64; ALPHABET_SIZE],
}

/// One decoded and scored shift.
struct Candidate {
    shift: u8,
    plaintext: String,
    score: Score,
}

/// Brute-force search over all 26 shifts.
#[derive(Debug, Clone, Default)]
pub struct KeySearch<S = FrequencyScorer> {
    scorer: S,
}

impl<S: Scorer> KeySearch<S> {
    /// Creates a search that ranks candidates with `scorer`.
    pub fn new(scorer: S) -> Self {
        KeySearch { scorer }
    }

    /// The scorer used to rank candidates.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    fn candidate(&self, cipher_text: &str, shift: u8) -> Candidate {
        let plaintext = shift_codec::decode(cipher_text, shift as i64);
        let score = self.scorer.score(&plaintext);
        trace!(
            "shift {:2}: score {:.6} ({} ops)",
            shift,
            score.value,
            score.operations
        );
        Candidate {
            shift,
            plaintext,
            score,
        }
    }

    /// Searches every shift of `cipher_text` for the best-scoring plaintext.
    ///
    /// # Parameters
    /// - `cipher_text`: Any text. Empty or letter-free input is valid and
    ///   yields shift 0 with [`SENTINEL_SCORE`].
    ///
    /// # Returns
    /// The [`Analysis`] of the lowest-scoring shift. Ties go to the lower
    /// shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarbreak::key_search::KeySearch;
    /// use caesarbreak::scorer::FrequencyScorer;
    /// use caesarbreak::shift_codec::encode;
    ///
    /// let search = KeySearch::new(FrequencyScorer::default());
    /// let cipher = encode("DEFEND THE EAST WALL OF THE CASTLE AT DAWN", 3);
    /// let analysis = search.search(&cipher);
    /// assert_eq!(analysis.best_shift, 3);
    /// assert_eq!(analysis.best_plaintext, "DEFEND THE EAST WALL OF THE CASTLE AT DAWN");
    /// ```
    pub fn search(&self, cipher_text: &str) -> Analysis {
        let mut ops = OpCounter::new();
        let mut per_shift_scores = [SENTINEL_SCORE; ALPHABET_SIZE];
        let mut best = Best::new(cipher_text);

        for shift in 0..ALPHABET_SIZE as u8 {
            ops.tick();
            let candidate = self.candidate(cipher_text, shift);
            ops.add(candidate.score.operations);
            per_shift_scores[shift as usize] = candidate.score.value;
            best.offer(candidate);
        }

        best.finish(ops, per_shift_scores)
    }

    /// Same result as [`search`](Self::search), with the 26 candidates
    /// decoded and scored on the rayon thread pool.
    ///
    /// Candidates are collected in shift order before the minimum is taken,
    /// so ties resolve exactly as in the sequential search.
    pub fn search_parallel(&self, cipher_text: &str) -> Analysis {
        let candidates: Vec<Candidate> = (0..ALPHABET_SIZE as u8)
            .into_par_iter()
            .map(|shift| self.candidate(cipher_text, shift))
            .collect();

        let mut ops = OpCounter::new();
        let mut per_shift_scores = [SENTINEL_SCORE; ALPHABET_SIZE];
        let mut best = Best::new(cipher_text);
        for candidate in candidates {
            ops.tick();
            ops.add(candidate.score.operations);
            per_shift_scores[candidate.shift as usize] = candidate.score.value;
            best.offer(candidate);
        }

        best.finish(ops, per_shift_scores)
    }
}

/// Best-so-far tracker implementing the strict-minimum rule.
struct Best {
    shift: u8,
    plaintext: Option<String>,
    fallback: String,
    score: f64,
}

impl Best {
    fn new(cipher_text: &str) -> Self {
        Best {
            shift: 0,
            plaintext: None,
            fallback: cipher_text.to_uppercase(),
            score: SENTINEL_SCORE,
        }
    }

    fn offer(&mut self, candidate: Candidate) {
        if candidate.score.value < self.score {
            self.shift = candidate.shift;
            self.score = candidate.score.value;
            self.plaintext = Some(candidate.plaintext);
        }
    }

    fn finish(self, ops: OpCounter, per_shift_scores: [f64; ALPHABET_SIZE]) -> Analysis {
        debug!(
            "best shift {} with score {:.6} after {} ops",
            self.shift,
            self.score,
            ops.total()
        );
        Analysis {
            best_shift: self.shift,
            best_plaintext: self.plaintext.unwrap_or(self.fallback),
            best_score: self.score,
            total_operations: ops.total(),
            per_shift_scores,
        }
    }
}
