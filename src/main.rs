//! Word Scramble - CLI
//!
//! Word derivation game with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_word, run_audit, run_simple},
    engine::Session,
    output::{print_audit_report, print_check_result, print_derivable},
    wordlists::RoundSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word data file ('root:word1,word2,...' per line); defaults to the built-in set
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for root word selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// Root word (must exist in the word data)
        root: String,

        /// Word to check
        word: String,
    },

    /// Report listed words that can never be accepted
    Audit,

    /// List every word in the data set spellable from a root word
    Derive {
        /// Root word
        root: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => init_file_logging(&cli.log_file)?,
        _ => init_stderr_logging(),
    }

    // Word data is required for everything; failing here aborts startup
    let source = load_source(cli.words.as_deref())?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match command {
        Commands::Play => run_play_command(source, rng),
        Commands::Simple => {
            let mut session = Session::with_rng(source, rng);
            run_simple(&mut session).context("simple mode I/O failed")
        }
        Commands::Check { root, word } => {
            let result = check_word(&source, &root, &word)?;
            print_check_result(&result, &word);
            Ok(())
        }
        Commands::Audit => {
            let report = run_audit(&source);
            print_audit_report(&report);
            Ok(())
        }
        Commands::Derive { root } => {
            print_derivable(&root, &source.derivable_from(&root));
            Ok(())
        }
    }
}

/// Load word data from `path`, or the embedded set when no path is given
fn load_source(path: Option<&Path>) -> Result<RoundSource> {
    match path {
        Some(path) => RoundSource::load_from_file(path)
            .with_context(|| format!("cannot start without word data ({})", path.display())),
        None => RoundSource::embedded().context("built-in word data is unusable"),
    }
}

fn run_play_command(source: RoundSource, rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    info!(records = source.len(), "Starting TUI");
    let app = App::new(Session::with_rng(source, rng));
    run_tui(app)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file so the TUI is not corrupted
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
