//! Wordle Filter - CLI
//!
//! Full-screen grid, line-based mode, and one-shot filter and replay commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use wordle_filter::{
    commands::{ReplayConfig, replay_guesses, run_filter, run_simple},
    interactive::{App, run_tui},
    output::{print_filter_result, print_replay_result},
    session::{Session, SessionConfig},
    wordlists::{
        Dictionary, WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Narrow down Wordle answers from the feedback of every guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(long, global = true, default_value_t = SessionConfig::DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of guesses in the grid
    #[arg(long, global = true, default_value_t = SessionConfig::DEFAULT_MAX_ROWS)]
    rows: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI grid (default)
    Play,

    /// Simple CLI mode (guess and feedback prompts without TUI)
    Simple {
        /// Maximum candidates to print after each guess
        #[arg(short, long, default_value = "40")]
        limit: usize,
    },

    /// Apply clues like `crane:-Y--G` and print what is left
    Filter {
        /// Clues in the order they were played
        #[arg(required = true, value_name = "GUESS:FEEDBACK")]
        clues: Vec<String>,

        /// Maximum candidates to print
        #[arg(short, long, default_value = "100")]
        limit: usize,
    },

    /// Score guesses against a known answer and show how the list narrows
    Replay {
        /// The answer to score against
        #[arg(short, long)]
        answer: String,

        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Maximum candidates to print
        #[arg(short, long, default_value = "40")]
        limit: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the built-in five-letter list
/// - "<path>": one word per line; words of other lengths are skipped
fn load_wordlist(wordlist_mode: &str, word_length: usize) -> Result<Dictionary> {
    let dictionary = match wordlist_mode {
        "embedded" => words_from_slice(WORDS, word_length)
            .context("the built-in list only has five-letter words")?,
        path => load_from_file(path, word_length)
            .with_context(|| format!("loading word list from {path}"))?,
    };
    info!("using {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = SessionConfig::new(cli.length, cli.rows).context("invalid grid size")?;
    let dictionary = load_wordlist(&cli.wordlist, config.word_length)?;
    let total = dictionary.len();
    let mut session = Session::new(dictionary, config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple { limit } => run_simple(&mut session, limit),
        Commands::Filter { clues, limit } => {
            let result = run_filter(&mut session, &clues)?;
            print_filter_result(&result, total, limit);
            Ok(())
        }
        Commands::Replay {
            answer,
            guesses,
            limit,
        } => {
            let config = ReplayConfig::new(&answer, guesses);
            let result = replay_guesses(&mut session, &config)?;
            print_replay_result(&result, total, limit);
            Ok(())
        }
    }
}
