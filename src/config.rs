//! Game configuration
//!
//! Fixed at startup; nothing here is mutated once a round is running.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use thiserror::Error;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default round length in hours
pub const DEFAULT_INTERVAL_HOURS: i64 = 4;

/// Fatal configuration problems
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("round interval must be positive, got {0}")]
    NonPositiveInterval(TimeDelta),
    #[error("round interval must be a whole number of milliseconds, got {0}")]
    FractionalInterval(TimeDelta),
    #[error("round interval {0} is too long to schedule from the epoch")]
    IntervalOutOfRange(TimeDelta),
}

/// Startup constants the round engine depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    /// Length of one round
    pub interval: TimeDelta,
    /// Start of round 1
    pub epoch: DateTime<Utc>,
    /// Title used in share text
    pub game_name: String,
    /// Trailing link in share text
    pub share_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: TimeDelta::hours(DEFAULT_INTERVAL_HOURS),
            epoch: default_epoch(),
            game_name: "Wordle Rounds".to_string(),
            share_url: "https://example.github.io/wordle-rounds/".to_string(),
        }
    }
}

impl GameConfig {
    /// Check the configuration before any round is produced
    ///
    /// # Errors
    /// Returns `ConfigError` for a zero word length, zero attempts or an
    /// interval that [`interval_millis`] rejects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        interval_millis(self.epoch, self.interval)?;
        Ok(())
    }
}

/// Round length in milliseconds, checked against the epoch
///
/// The interval must be positive, a whole number of milliseconds, and the
/// first round boundary `epoch + interval` must be a representable instant.
///
/// # Errors
/// `NonPositiveInterval`, `FractionalInterval` or `IntervalOutOfRange`.
pub fn interval_millis(epoch: DateTime<Utc>, interval: TimeDelta) -> Result<i64, ConfigError> {
    if interval <= TimeDelta::zero() {
        return Err(ConfigError::NonPositiveInterval(interval));
    }
    let millis = interval.num_milliseconds();
    if millis == 0 || TimeDelta::try_milliseconds(millis) != Some(interval) {
        return Err(ConfigError::FractionalInterval(interval));
    }
    if epoch.checked_add_signed(interval).is_none() {
        return Err(ConfigError::IntervalOutOfRange(interval));
    }
    Ok(millis)
}

/// 2024-12-26 17:00 UTC, the first round of the public schedule
#[must_use]
pub fn default_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 26, 17, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
