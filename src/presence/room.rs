//! Room identifiers and player names

use super::PresenceError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Characters a room id is drawn from
pub const ROOM_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a room id
pub const ROOM_ID_LEN: usize = 6;

/// Longest player name kept after sanitizing
pub const MAX_NAME_LEN: usize = 50;

/// Six-character `[A-Z0-9]` room code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    /// Draw a fresh room id
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..ROOM_ID_LEN)
            .map(|_| char::from(ROOM_ID_ALPHABET[rng.random_range(0..ROOM_ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    /// Parse a user-entered room id
    ///
    /// Surrounding whitespace is ignored; case is not.
    ///
    /// # Errors
    /// Returns `PresenceError::InvalidRoomId` unless the value is exactly six
    /// uppercase ASCII letters or digits.
    ///
    /// # Examples
    /// ```
    /// use wordle_rounds::presence::RoomId;
    ///
    /// assert!(RoomId::parse("AB12CD").is_ok());
    /// assert!(RoomId::parse("ab12cd").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, PresenceError> {
        let value = value.trim();
        let valid = value.len() == ROOM_ID_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !valid {
            return Err(PresenceError::InvalidRoomId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoomId {
    type Err = PresenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clean a display name before it is shared with other players
///
/// Markup characters are dropped, then anything that is not a letter, digit,
/// whitespace, `-` or `_`. The result is cut to 50 characters and trimmed.
///
/// # Errors
/// Returns `PresenceError::InvalidName` if nothing is left.
///
/// # Examples
/// ```
/// use wordle_rounds::presence::sanitize_name;
///
/// assert_eq!(sanitize_name("  <b>Ayşe</b> ").unwrap(), "bAyşeb");
/// assert!(sanitize_name("<>\"'").is_err());
/// ```
pub fn sanitize_name(raw: &str) -> Result<String, PresenceError> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_')
        .take(MAX_NAME_LEN)
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return Err(PresenceError::InvalidName);
    }
    Ok(trimmed.to_string())
}
