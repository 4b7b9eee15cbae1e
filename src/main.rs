//! Wordle Rounds - CLI
//!
//! Time-sliced word guessing game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_rounds::{
    commands::{evaluate_words, run_simple, today_info, upcoming_rounds},
    config::{DEFAULT_INTERVAL_HOURS, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, default_epoch},
    game::{Clock, RoundSchedule, RoundSession, SystemClock},
    output::{print_evaluation, print_schedule, print_today},
    presence::{PresenceChannel, RoomId, TracingSink, sanitize_name},
    wordlists::{WordCatalog, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_rounds",
    about = "Guess the word of the round; a new round starts every few hours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a .json array / one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Guesses per round
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Round length in minutes
    #[arg(long, global = true, default_value_t = DEFAULT_INTERVAL_HOURS * 60)]
    interval_minutes: i64,

    /// Start of round 1 (RFC 3339, e.g. 2024-12-26T17:00:00Z)
    #[arg(long, global = true)]
    epoch: Option<DateTime<Utc>>,

    /// Seed for the hint letter choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Multiplayer room: 'new' or a 6-character room id
    #[arg(long, global = true)]
    room: Option<String>,

    /// Display name shown to other players in the room
    #[arg(long, global = true, default_value = "Player")]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the live round and the time until the next one
    Today {
        /// Also print the word of the round
        #[arg(long)]
        reveal: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a guess against any target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The word to compare against
        target: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the start times of upcoming rounds
    Schedule {
        /// Number of rounds to list
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let interval = TimeDelta::try_minutes(cli.interval_minutes)
        .context("round interval is out of range")?;
    let config = GameConfig {
        word_length: cli.word_length,
        max_attempts: cli.max_attempts,
        interval,
        epoch: cli.epoch.unwrap_or_else(default_epoch),
        ..GameConfig::default()
    };
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

fn load_catalog(cli: &Cli, config: &GameConfig) -> Result<WordCatalog> {
    let source = WordSource::from_arg(&cli.wordlist);
    WordCatalog::load(&source, config.word_length)
        .with_context(|| format!("could not load word list '{}'", cli.wordlist))
}

fn hint_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn presence_channel(cli: &Cli, config: &GameConfig) -> Result<Option<PresenceChannel<TracingSink>>> {
    let Some(room) = cli.room.as_deref() else {
        return Ok(None);
    };

    let room = if room.eq_ignore_ascii_case("new") {
        RoomId::generate(&mut rand::rng())
    } else {
        RoomId::parse(room)?
    };
    let name = sanitize_name(&cli.name)?;
    info!(%room, %name, "joined room");
    eprintln!("Room: {room}");

    let sink = TracingSink::new(room, name);
    Ok(Some(PresenceChannel::new(
        sink,
        config.max_attempts,
        config.word_length,
    )))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = game_config(&cli)?;
    let schedule = RoundSchedule::from_config(&config)?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &config, schedule),
        Commands::Simple => run_simple_command(&cli, &config, schedule),
        Commands::Today { reveal, json } => {
            let catalog = load_catalog(&cli, &config)?;
            let info = today_info(&schedule, &catalog, SystemClock.now(), *reveal)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_today(&info);
            }
            Ok(())
        }
        Commands::Evaluate { guess, target, json } => {
            let result = evaluate_words(guess, target, config.word_length)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_evaluation(&result);
            }
            Ok(())
        }
        Commands::Schedule { count } => {
            print_schedule(&upcoming_rounds(&schedule, SystemClock.now(), *count));
            Ok(())
        }
    }
}

fn run_simple_command(cli: &Cli, config: &GameConfig, schedule: RoundSchedule) -> Result<()> {
    let catalog = load_catalog(cli, config)?;
    let mut presence = presence_channel(cli, config)?;
    let mut session = RoundSession::start(config, schedule, &catalog, SystemClock, hint_rng(cli.seed))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_simple(&mut session, config, presence.as_mut(), &mut input, &mut out)?;
    Ok(())
}

fn run_play_command(cli: &Cli, config: &GameConfig, schedule: RoundSchedule) -> Result<()> {
    use wordle_rounds::interactive::{App, run_tui};

    let catalog = load_catalog(cli, config)?;
    let presence = presence_channel(cli, config)?;
    let session = RoundSession::start(config, schedule, &catalog, SystemClock, hint_rng(cli.seed))?;

    let mut app = App::new(session, config, schedule);
    if let Some(channel) = presence {
        app = app.with_presence(channel);
    }
    run_tui(app)
}
