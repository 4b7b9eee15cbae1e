//! Current round summary

use crate::game::RoundSchedule;
use crate::wordlists::{CatalogError, WordCatalog};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// The round live at a given instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayInfo {
    pub round_number: u64,
    pub started_at: DateTime<Utc>,
    pub next_round_at: DateTime<Utc>,
    #[serde(skip)]
    pub remaining: TimeDelta,
    /// Only filled in when explicitly revealed
    pub target: Option<String>,
}

/// Describe the round live at `now`
///
/// # Errors
///
/// Returns `CatalogError::Empty` if `reveal` is set and the catalog has no words.
pub fn today_info(
    schedule: &RoundSchedule,
    catalog: &WordCatalog,
    now: DateTime<Utc>,
    reveal: bool,
) -> Result<TodayInfo, CatalogError> {
    let index = schedule.round_index(now);
    let target = if reveal {
        Some(catalog.word_for_round(index)?.text().to_string())
    } else {
        None
    };

    Ok(TodayInfo {
        round_number: index + 1,
        started_at: schedule.round_start(index),
        next_round_at: schedule.round_start(index + 1),
        remaining: schedule.time_until_next_round(now),
        target,
    })
}
