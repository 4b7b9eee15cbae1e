//! Outgoing progress channel
//!
//! After every settled guess the session yields a `ProgressReport`. The
//! channel validates it, applies the rate limit and hands it to a
//! `ProgressSink`. Nothing that goes wrong here reaches the round: failures
//! are logged and dropped.

use super::PresenceError;
use super::room::RoomId;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{info, warn};

/// Updates allowed per rolling window
pub const MAX_UPDATES_PER_MINUTE: usize = 30;

/// Progress of the local player after a settled guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub attempts_used: usize,
    /// Correct positions in the latest guess
    pub letters_found: usize,
    pub is_completed: bool,
}

impl ProgressReport {
    /// Check the report against the round's bounds
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidProgress` if a count is out of range.
    pub fn validate(&self, max_attempts: usize, word_length: usize) -> Result<(), PresenceError> {
        if self.attempts_used > max_attempts || self.letters_found > word_length {
            return Err(PresenceError::InvalidProgress(*self));
        }
        Ok(())
    }
}

/// Transport for progress reports
pub trait ProgressSink {
    /// Deliver one report
    ///
    /// # Errors
    /// Any transport failure; the channel logs and discards it.
    fn send(&mut self, report: &ProgressReport) -> Result<(), PresenceError>;
}

/// Sink that only logs; used when no network transport is configured
#[derive(Debug, Clone)]
pub struct TracingSink {
    room: RoomId,
    player: String,
}

impl TracingSink {
    #[must_use]
    pub const fn new(room: RoomId, player: String) -> Self {
        Self { room, player }
    }
}

impl ProgressSink for TracingSink {
    fn send(&mut self, report: &ProgressReport) -> Result<(), PresenceError> {
        info!(
            room = %self.room,
            player = %self.player,
            attempts = report.attempts_used,
            letters = report.letters_found,
            completed = report.is_completed,
            "progress update"
        );
        Ok(())
    }
}

/// Sliding one-minute window limiter
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max: usize,
    window: TimeDelta,
    sent: VecDeque<DateTime<Utc>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_UPDATES_PER_MINUTE, TimeDelta::minutes(1))
    }
}

impl RateLimiter {
    #[must_use]
    pub const fn new(max: usize, window: TimeDelta) -> Self {
        Self {
            max,
            window,
            sent: VecDeque::new(),
        }
    }

    /// Record an update at `now` if the window has room
    pub fn try_acquire(&mut self, now: DateTime<Utc>) -> bool {
        let cutoff = now - self.window;
        while self.sent.front().is_some_and(|&t| t <= cutoff) {
            self.sent.pop_front();
        }
        if self.sent.len() >= self.max {
            return false;
        }
        self.sent.push_back(now);
        true
    }
}

/// What happened to a published report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    RateLimited,
    Rejected,
    Failed,
}

/// Validating, rate-limited wrapper around a sink
#[derive(Debug)]
pub struct PresenceChannel<S: ProgressSink> {
    sink: S,
    limiter: RateLimiter,
    max_attempts: usize,
    word_length: usize,
}

impl<S: ProgressSink> PresenceChannel<S> {
    #[must_use]
    pub fn new(sink: S, max_attempts: usize, word_length: usize) -> Self {
        Self {
            sink,
            limiter: RateLimiter::default(),
            max_attempts,
            word_length,
        }
    }

    #[must_use]
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Publish a report; never fails
    pub fn publish(&mut self, report: ProgressReport, now: DateTime<Utc>) -> Delivery {
        if let Err(e) = report.validate(self.max_attempts, self.word_length) {
            warn!(error = %e, "dropping progress update");
            return Delivery::Rejected;
        }
        if !self.limiter.try_acquire(now) {
            warn!("progress update rate limit exceeded");
            return Delivery::RateLimited;
        }
        match self.sink.send(&report) {
            Ok(()) => Delivery::Sent,
            Err(e) => {
                warn!(error = %e, "progress update failed");
                Delivery::Failed
            }
        }
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}
