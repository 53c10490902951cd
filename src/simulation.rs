//! Monte-Carlo validation of the key search.
//!
//! Generates random plaintexts that follow a frequency table, encrypts each
//! with a random key, breaks it, and aggregates operation counts and success
//! rates per text length. The averages are compared against the analytic
//! cost `26 * (1 + L + 26)` to show the search is linear in `L`.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::ALPHABET_SIZE;
use crate::error::CaesarError;
use crate::frequency::FrequencyTable;
use crate::key_search::KeySearch;
use crate::scorer::{FrequencyScorer, Metric};
use crate::shift_codec;

/// Default text lengths, matching a short, medium and long message.
pub const DEFAULT_LENGTHS: [usize; 3] = [1000, 5000, 10000];

/// Default number of trials per length.
pub const DEFAULT_TRIALS: usize = 10;

/// Analytic operation count of one search over `length` letters.
pub fn theoretical_operations(length: usize) -> u64 {
    let n = ALPHABET_SIZE as u64;
    n * (1 + length as u64 + n)
}

/// Generates `length` uppercase letters distributed like `table`.
///
/// Each letter is drawn by cumulative selection: a uniform value in
/// `[0, table.total())` picks the first symbol whose running sum reaches it.
/// Floating-point drift past the last bucket falls back to `E`.
///
/// # Examples
///
/// ```
/// use caesarbreak::frequency::FrequencyTable;
/// use caesarbreak::simulation::generate_plain_text;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let text = generate_plain_text(50, &FrequencyTable::english(), &mut rng);
/// assert_eq!(text.len(), 50);
/// assert!(text.chars().all(|c| c.is_ascii_uppercase()));
/// ```
pub fn generate_plain_text<R: Rng + ?Sized>(
    length: usize,
    table: &FrequencyTable,
    rng: &mut R,
) -> String {
    let total = table.total();
    let mut text = String::with_capacity(length);
    for _ in 0..length {
        let draw = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        let mut chosen = 'E';
        for (symbol, freq) in table.iter() {
            cumulative += freq;
            if draw <= cumulative && freq > 0.0 {
                chosen = symbol;
                break;
            }
        }
        text.push(chosen);
    }
    text
}

/// Parameters of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Plaintext lengths to test.
    pub lengths: Vec<usize>,
    /// Trials per length.
    pub trials: usize,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Scoring metric for the search.
    pub metric: Metric,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            lengths: DEFAULT_LENGTHS.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: None,
            metric: Metric::default(),
        }
    }
}

/// Aggregated results for one plaintext length.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRow {
    /// Plaintext length in letters.
    pub length: usize,
    /// Mean search operations over all trials.
    pub average_operations: f64,
    /// Analytic cost `26 * (1 + length + 26)`.
    pub theoretical_operations: u64,
    /// Percentage of trials whose key was recovered.
    pub success_rate: f64,
    /// Key used in the first trial.
    pub example_true_shift: u8,
    /// Per-shift scores of the first trial.
    pub example_scores: [f64; ALPHABET_SIZE],
}

/// Runs the simulation described by `config` against `table`.
///
/// # Errors
/// Returns [`CaesarError::InvalidSimulation`] if there are no lengths or
/// no trials.
pub fn run_simulation(
    config: &SimulationConfig,
    table: &FrequencyTable,
) -> Result<Vec<SimulationRow>, CaesarError> {
    if config.lengths.is_empty() {
        return Err(CaesarError::InvalidSimulation(
            "at least one length is required".to_string(),
        ));
    }
    if config.trials == 0 {
        return Err(CaesarError::InvalidSimulation(
            "trials must be at least 1".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let search = KeySearch::new(FrequencyScorer::new(table.clone(), config.metric));

    let mut rows = Vec::with_capacity(config.lengths.len());
    for &length in &config.lengths {
        info!("simulating L={} ({} trials)", length, config.trials);
        let mut total_operations = 0u64;
        let mut successes = 0usize;
        let mut example_true_shift = 0;
        let mut example_scores = [0.0; ALPHABET_SIZE];

        for trial in 0..config.trials {
            let plain = generate_plain_text(length, table, &mut rng);
            let true_shift: u8 = rng.gen_range(1..=25);
            let cipher = shift_codec::encode(&plain, true_shift as i64);
            let analysis = search.search(&cipher);

            total_operations += analysis.total_operations;
            if analysis.best_shift == true_shift {
                successes += 1;
            }
            debug!(
                "L={} trial {}: true shift {}, found {}",
                length, trial, true_shift, analysis.best_shift
            );
            if trial == 0 {
                example_true_shift = true_shift;
                example_scores = analysis.per_shift_scores;
            }
        }

        rows.push(SimulationRow {
            length,
            average_operations: total_operations as f64 / config.trials as f64,
            theoretical_operations: theoretical_operations(length),
            success_rate: successes as f64 / config.trials as f64 * 100.0,
            example_true_shift,
            example_scores,
        });
    }
    Ok(rows)
}
