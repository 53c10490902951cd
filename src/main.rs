//! Command-line front-end for caesarbreak.
//!
//! ```text
//! caesarbreak [OPTIONS] <CIPHERTEXT>          break a ciphertext
//! caesarbreak [OPTIONS] -- <CIPHERTEXT>       break a ciphertext named like a subcommand
//! caesarbreak encode --shift <K> <TEXT>       encrypt a message
//! caesarbreak simulate [--lengths ..] [..]    measure cost and success rate
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use caesarbreak::config::{AnalyzerConfig, Language};
use caesarbreak::error::CaesarError;
use caesarbreak::frequency::FrequencyTable;
use caesarbreak::scorer::Metric;
use caesarbreak::simulation::{self, SimulationConfig, DEFAULT_LENGTHS, DEFAULT_TRIALS};
use caesarbreak::{encode, report, Analyzer};

/// Exit status for missing or empty input.
const EXIT_USAGE: u8 = 2;

const AFTER_HELP: &str = "\
A ciphertext that is exactly a subcommand name must follow `--`:
  caesarbreak -- simulate";

/// Break Caesar ciphers by letter-frequency analysis
#[derive(Parser)]
#[command(name = "caesarbreak")]
#[command(version, about, args_conflicts_with_subcommands = true)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ciphertext to break
    #[arg(value_name = "CIPHERTEXT")]
    cipher_text: Option<String>,

    #[command(flatten)]
    scoring: ScoringArgs,

    /// Print the score of every shift
    #[arg(long)]
    scores: bool,

    /// Score the 26 shifts in parallel
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Args)]
struct ScoringArgs {
    /// Reference language
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = Language::English)]
    language: Language,

    /// Scoring metric
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = Metric::SquaredError)]
    metric: Metric,

    /// JSON frequency table, e.g. {"A": 0.08, "B": 0.015}; overrides --language
    #[arg(short, long, value_name = "PATH")]
    table: Option<PathBuf>,
}

impl ScoringArgs {
    fn table(&self) -> Result<FrequencyTable, CaesarError> {
        match &self.table {
            Some(path) => FrequencyTable::from_json_file(path),
            None => Ok(self.language.table()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt TEXT with a Caesar shift
    Encode {
        /// Key; any integer, reduced modulo 26
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,

        /// Text to encrypt
        text: String,
    },
    /// Encrypt and break random texts, reporting cost and success rate
    Simulate {
        /// Comma-separated plaintext lengths
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_LENGTHS.to_vec())]
        lengths: Vec<usize>,

        /// Trials per length
        #[arg(long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// Print the per-shift scores of the first trial of each length
        #[arg(long)]
        scores: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_break(cli: &Cli) -> Result<(), CaesarError> {
    let cipher_text = cli.cipher_text.as_deref().unwrap_or_default();
    let config = AnalyzerConfig::default()
        .with_table(cli.scoring.table()?)
        .with_metric(cli.scoring.metric)
        .with_parallel(cli.parallel);
    let analysis = Analyzer::new(config).analyze_input(cipher_text)?;

    print!("{}", report::format_analysis(&analysis));
    if cli.scores {
        println!();
        print!(
            "{}",
            report::render_score_chart(&analysis.per_shift_scores, Some(analysis.best_shift))
        );
    }
    Ok(())
}

fn run_simulate(
    lengths: &[usize],
    trials: usize,
    seed: Option<u64>,
    scoring: &ScoringArgs,
    scores: bool,
) -> Result<(), CaesarError> {
    let config = SimulationConfig {
        lengths: lengths.to_vec(),
        trials,
        seed,
        metric: scoring.metric,
    };
    let rows = simulation::run_simulation(&config, &scoring.table()?)?;

    if scores {
        for row in &rows {
            println!(
                "L={} (true shift {}):",
                row.length, row.example_true_shift
            );
            print!(
                "{}",
                report::render_score_chart(&row.example_scores, Some(row.example_true_shift))
            );
            println!();
        }
    }
    print!("{}", report::format_summary(&rows));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Encode { shift, text }) => {
            println!("{}", encode(text, *shift));
            Ok(())
        }
        Some(Commands::Simulate {
            lengths,
            trials,
            seed,
            scoring,
            scores,
        }) => run_simulate(lengths, *trials, *seed, scoring, *scores),
        None => run_break(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CaesarError::EmptyInput) => {
            eprintln!("error: {}", CaesarError::EmptyInput);
            eprintln!("usage: caesarbreak [OPTIONS] [--] <CIPHERTEXT>");
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
