//! Opponent change detection
//!
//! The transport delivers whole room snapshots. Comparing two consecutive
//! snapshots per player yields the events worth telling the local player about.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One player's state as published to the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub is_online: bool,
    #[serde(default)]
    pub current_attempt: usize,
    #[serde(default)]
    pub letters_found: usize,
    #[serde(default)]
    pub is_completed: bool,
}

/// Something an opponent did between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceEvent {
    Joined,
    /// Removed from the room
    Left,
    /// Still listed, but offline
    Disconnected,
    FirstAttempt,
    LettersFound { from: usize, to: usize },
    Completed,
}

impl PresenceEvent {
    /// Short status line for the local player
    #[must_use]
    pub fn notification(&self, name: &str) -> String {
        match self {
            Self::Joined => format!("{name} joined the room"),
            Self::Left => format!("{name} left the room"),
            Self::Disconnected => format!("{name} disconnected"),
            Self::FirstAttempt => format!("{name} made a first guess"),
            Self::LettersFound { to, .. } if *to == 1 => format!("{name} found 1 letter"),
            Self::LettersFound { to, .. } => format!("{name} found {to} letters"),
            Self::Completed => format!("{name} solved the word!"),
        }
    }
}

/// Events for one player between two snapshots
///
/// `None` means the player is not in that snapshot.
#[must_use]
pub fn classify(prev: Option<&PlayerSnapshot>, next: Option<&PlayerSnapshot>) -> Vec<PresenceEvent> {
    let mut events = Vec::new();
    match (prev, next) {
        (None, Some(next)) if next.is_online => events.push(PresenceEvent::Joined),
        (Some(_), None) => events.push(PresenceEvent::Left),
        (Some(prev), Some(next)) => match (prev.is_online, next.is_online) {
            (true, false) => events.push(PresenceEvent::Disconnected),
            (false, true) => events.push(PresenceEvent::Joined),
            (true, true) => progress_events(prev, next, &mut events),
            (false, false) => {}
        },
        _ => {}
    }
    events
}

fn progress_events(prev: &PlayerSnapshot, next: &PlayerSnapshot, events: &mut Vec<PresenceEvent>) {
    if prev.current_attempt == 0 && next.current_attempt > 0 {
        events.push(PresenceEvent::FirstAttempt);
    }
    if !prev.is_completed && next.is_completed {
        events.push(PresenceEvent::Completed);
    } else if next.letters_found > prev.letters_found {
        events.push(PresenceEvent::LettersFound {
            from: prev.letters_found,
            to: next.letters_found,
        });
    }
}

/// An event attributed to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEvent {
    pub player_id: String,
    pub name: String,
    pub event: PresenceEvent,
}

impl RoomEvent {
    #[must_use]
    pub fn notification(&self) -> String {
        self.event.notification(&self.name)
    }
}

/// Diff two room snapshots, skipping the local player
///
/// Events come out ordered by player id, then in classification order.
#[must_use]
pub fn diff_room(
    self_id: &str,
    old: &BTreeMap<String, PlayerSnapshot>,
    new: &BTreeMap<String, PlayerSnapshot>,
) -> Vec<RoomEvent> {
    let ids: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    ids.into_iter()
        .filter(|id| id.as_str() != self_id)
        .flat_map(|id| {
            let prev = old.get(id);
            let next = new.get(id);
            let name = next.or(prev).map(|p| p.name.clone()).unwrap_or_default();
            classify(prev, next).into_iter().map(move |event| RoomEvent {
                player_id: id.clone(),
                name: name.clone(),
                event,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, attempt: usize, letters: usize) -> PlayerSnapshot {
        PlayerSnapshot {
            name: name.to_string(),
            is_online: true,
            current_attempt: attempt,
            letters_found: letters,
            is_completed: false,
        }
    }

    fn offline(mut p: PlayerSnapshot) -> PlayerSnapshot {
        p.is_online = false;
        p
    }

    #[test]
    fn join_and_leave() {
        let p = player("Ece", 0, 0);
        assert_eq!(classify(None, Some(&p)), vec![PresenceEvent::Joined]);
        assert_eq!(classify(Some(&p), None), vec![PresenceEvent::Left]);
        assert!(classify(None, Some(&offline(p.clone()))).is_empty());
        assert!(classify(None, None).is_empty());
    }

    #[test]
    fn disconnect_and_return() {
        let p = player("Ece", 2, 1);
        let gone = offline(p.clone());
        assert_eq!(
            classify(Some(&p), Some(&gone)),
            vec![PresenceEvent::Disconnected]
        );
        assert_eq!(classify(Some(&gone), Some(&p)), vec![PresenceEvent::Joined]);
        assert!(classify(Some(&gone), Some(&gone)).is_empty());
    }

    #[test]
    fn first_attempt_with_letters() {
        let before = player("Ece", 0, 0);
        let after = player("Ece", 1, 2);
        assert_eq!(
            classify(Some(&before), Some(&after)),
            vec![
                PresenceEvent::FirstAttempt,
                PresenceEvent::LettersFound { from: 0, to: 2 }
            ]
        );
    }

    #[test]
    fn fewer_letters_is_quiet() {
        let before = player("Ece", 2, 3);
        let after = player("Ece", 3, 1);
        assert!(classify(Some(&before), Some(&after)).is_empty());
    }

    #[test]
    fn completion_replaces_letter_event() {
        let before = player("Ece", 3, 2);
        let mut after = player("Ece", 4, 5);
        after.is_completed = true;
        assert_eq!(
            classify(Some(&before), Some(&after)),
            vec![PresenceEvent::Completed]
        );
        // Already completed: nothing new
        assert!(classify(Some(&after), Some(&after)).is_empty());
    }

    #[test]
    fn notifications() {
        assert_eq!(
            PresenceEvent::Joined.notification("Ece"),
            "Ece joined the room"
        );
        assert_eq!(
            PresenceEvent::LettersFound { from: 0, to: 1 }.notification("Ece"),
            "Ece found 1 letter"
        );
        assert_eq!(
            PresenceEvent::LettersFound { from: 1, to: 3 }.notification("Ece"),
            "Ece found 3 letters"
        );
        assert_eq!(
            PresenceEvent::Completed.notification("Can"),
            "Can solved the word!"
        );
    }

    #[test]
    fn diff_room_skips_self_and_orders_by_id() {
        let mut old = BTreeMap::new();
        old.insert("me".to_string(), player("Me", 0, 0));
        old.insert("b".to_string(), player("Bora", 0, 0));
        old.insert("c".to_string(), player("Cem", 1, 1));

        let mut new = BTreeMap::new();
        new.insert("me".to_string(), player("Me", 1, 3));
        new.insert("a".to_string(), player("Ayla", 0, 0));
        new.insert("b".to_string(), player("Bora", 1, 2));

        let events = diff_room("me", &old, &new);
        let summary: Vec<(&str, PresenceEvent)> = events
            .iter()
            .map(|e| (e.player_id.as_str(), e.event))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("a", PresenceEvent::Joined),
                ("b", PresenceEvent::FirstAttempt),
                ("b", PresenceEvent::LettersFound { from: 0, to: 2 }),
                ("c", PresenceEvent::Left),
            ]
        );
        assert_eq!(events[3].notification(), "Cem left the room");
    }

    #[test]
    fn snapshot_parses_transport_json() {
        let json = r#"{"name":"Ece","isOnline":true,"currentAttempt":2,"lettersFound":3}"#;
        let snapshot: PlayerSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot, player("Ece", 2, 3));
    }
}
