//! Interactive TUI
//!
//! ratatui/crossterm front end for playing a live round.

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
