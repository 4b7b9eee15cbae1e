//! Upcoming round listing

use crate::game::RoundSchedule;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A future round and when it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledRound {
    pub round_number: u64,
    pub starts_at: DateTime<Utc>,
}

/// The `count` rounds that start after `now`
#[must_use]
pub fn upcoming_rounds(schedule: &RoundSchedule, now: DateTime<Utc>, count: usize) -> Vec<ScheduledRound> {
    let current = schedule.round_index(now);
    (1..=count as u64)
        .map(|offset| {
            let index = current + offset;
            ScheduledRound {
                round_number: index + 1,
                starts_at: schedule.round_start(index),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn lists_following_rounds() {
        let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let schedule = RoundSchedule::new(epoch, TimeDelta::hours(4)).unwrap();

        let rounds = upcoming_rounds(&schedule, epoch + TimeDelta::minutes(30), 3);
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0].round_number, 2);
        assert_eq!(rounds[0].starts_at, epoch + TimeDelta::hours(4));
        assert_eq!(rounds[2].starts_at, epoch + TimeDelta::hours(12));
    }

    #[test]
    fn before_epoch_counts_from_round_one() {
        let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let schedule = RoundSchedule::new(epoch, TimeDelta::hours(4)).unwrap();

        let rounds = upcoming_rounds(&schedule, epoch - TimeDelta::days(2), 1);
        assert_eq!(rounds[0].round_number, 2);
    }

    #[test]
    fn zero_count_is_empty() {
        let schedule = RoundSchedule::new(Utc::now(), TimeDelta::hours(4)).unwrap();
        assert!(upcoming_rounds(&schedule, Utc::now(), 0).is_empty());
    }
}
