//! Word Hand - CLI
//!
//! Deal letters, spell words, score points.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_hand::{
    commands::{deal_once, normalize_letters, score_word, suggest_word},
    config::{GameConfig, HAND_SIZE},
    game::{Dealer, FixedDealer, RandomDealer},
    interactive::{Console, Session},
    output::{print_deal, print_score_result, print_suggestion},
    wordlists::{DEFAULT_WORDLIST, Dictionary, loader::load_with_progress},
};

#[derive(Parser)]
#[command(
    name = "word_hand",
    about = "Word-tile game: deal a hand of letters and score words built from it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Letters dealt per hand (also the word length that earns the bonus)
    #[arg(short = 's', long, global = true, default_value_t = HAND_SIZE)]
    hand_size: usize,

    /// Seed for dealing, to make hands reproducible
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Play {
        /// Deal these exact letters every hand instead of random ones
        #[arg(short, long)]
        letters: Option<String>,
    },

    /// Score a word at the configured hand size
    Score {
        /// The word to score
        word: String,
    },

    /// Find the best dictionary word for a set of letters
    Suggest {
        /// Letters available to play
        letters: String,
    },

    /// Deal one random hand and show it
    Deal,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = GameConfig::default().with_hand_size(cli.hand_size);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { letters: None });

    match command {
        Commands::Play { letters } => {
            run_play_command(&cli.wordlist, config, cli.seed, letters.as_deref())
        }
        Commands::Score { word } => run_score_command(&word, &config),
        Commands::Suggest { letters } => run_suggest_command(&cli.wordlist, &letters, &config),
        Commands::Deal => run_deal_command(&config, cli.seed),
    }
}

/// Log to stderr so diagnostics never mix with prompts
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    load_with_progress(path)
        .with_context(|| format!("failed to load word list from {}", path.display()))
}

fn random_dealer(seed: Option<u64>) -> RandomDealer {
    seed.map_or_else(RandomDealer::new, RandomDealer::seeded)
}

fn run_play_command(
    wordlist: &Path,
    config: GameConfig,
    seed: Option<u64>,
    letters: Option<&str>,
) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let mut console = Console::stdio();

    match letters {
        Some(letters) => {
            let letters = normalize_letters(letters)?;
            // The bonus is earned by spending exactly the forced letters
            let config = config.with_hand_size(letters.len());
            info!(letters = %letters, "dealing fixed letters");
            run_session(config, &dictionary, FixedDealer::from_letters(&letters), &mut console)
        }
        None => run_session(config, &dictionary, random_dealer(seed), &mut console),
    }
}

fn run_session<D: Dealer>(
    config: GameConfig,
    dictionary: &Dictionary,
    dealer: D,
    console: &mut Console<io::StdinLock<'static>, io::Stdout>,
) -> Result<()> {
    let mut session = Session::new(config, dictionary, dealer);
    let summary = session.run(console)?;
    info!(
        hands_played = summary.hands_played,
        best = ?summary.best_score,
        "session ended"
    );
    Ok(())
}

fn run_score_command(word: &str, config: &GameConfig) -> Result<()> {
    let result = score_word(word, config)?;
    print_score_result(&mut io::stdout(), &result)?;
    Ok(())
}

fn run_suggest_command(wordlist: &Path, letters: &str, config: &GameConfig) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let suggestion = suggest_word(letters, &dictionary, config)?;
    print_suggestion(&mut io::stdout(), &suggestion)?;
    Ok(())
}

fn run_deal_command(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let report = deal_once(&mut random_dealer(seed), config.hand_size);
    print_deal(&mut io::stdout(), &report)?;
    Ok(())
}
