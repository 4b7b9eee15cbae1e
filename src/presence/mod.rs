//! Multiplayer presence
//!
//! Transport-agnostic pieces of playing a round alongside others: room codes,
//! name cleaning, the outgoing progress channel and opponent change events.
//! A presence failure never affects the local round.

mod channel;
mod diff;
mod room;

use thiserror::Error;

pub use channel::{
    Delivery, MAX_UPDATES_PER_MINUTE, PresenceChannel, ProgressReport, ProgressSink, RateLimiter,
    TracingSink,
};
pub use diff::{PlayerSnapshot, PresenceEvent, RoomEvent, classify, diff_room};
pub use room::{MAX_NAME_LEN, ROOM_ID_ALPHABET, ROOM_ID_LEN, RoomId, sanitize_name};

/// Presence failures; callers log them and carry on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenceError {
    #[error("invalid room id '{0}': expected 6 characters A-Z or 0-9")]
    InvalidRoomId(String),
    #[error("a player name needs at least one letter or digit")]
    InvalidName,
    #[error("progress out of range: {0:?}")]
    InvalidProgress(ProgressReport),
    #[error("transport error: {0}")]
    Transport(String),
}
