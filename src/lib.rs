//! Wordle Rounds
//!
//! A time-sliced word guessing game: every few hours a new round starts and
//! everyone plays the same word. Includes the round engine, the word catalog,
//! share formatting, multiplayer presence helpers and a terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rounds::config::GameConfig;
//! use wordle_rounds::core::Word;
//! use wordle_rounds::game::{ManualClock, Outcome, RoundSession};
//! use wordle_rounds::wordlists::WordCatalog;
//! use chrono::Utc;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = GameConfig::default();
//! let catalog = WordCatalog::from_strs(&["crane", "slate"], 5);
//! let target = Word::new("slate", 5).unwrap();
//! let mut session = RoundSession::with_target(
//!     &config,
//!     &catalog,
//!     target,
//!     ManualClock::new(Utc::now()),
//!     StdRng::seed_from_u64(1),
//! );
//!
//! for c in "crane".chars() {
//!     session.append_letter(c).unwrap();
//! }
//! let submission = session.submit_guess().unwrap();
//! assert_eq!(submission.evaluation.to_emoji(), "⬜⬜🟩⬜🟩");
//! session.advance_row().unwrap();
//!
//! for c in "slate".chars() {
//!     session.append_letter(c).unwrap();
//! }
//! assert_eq!(session.submit_guess().unwrap().outcome, Outcome::Won);
//! ```

// Startup configuration
pub mod config;

// Core domain types
pub mod core;

// Round scheduling and session state
pub mod game;

// Word lists
pub mod wordlists;

// Multiplayer presence
pub mod presence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
