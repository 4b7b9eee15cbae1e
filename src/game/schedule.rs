//! Round scheduling
//!
//! Rounds are fixed-length slices of wall-clock time starting at an epoch.
//! Round index `i` covers `[epoch + i*interval, epoch + (i+1)*interval)`;
//! every instant before the epoch belongs to round index 0.

use crate::config::{ConfigError, GameConfig, interval_millis};
use chrono::{DateTime, TimeDelta, Utc};

/// Global round schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSchedule {
    epoch: DateTime<Utc>,
    interval_ms: i64,
}

impl RoundSchedule {
    /// Build a schedule
    ///
    /// # Errors
    /// Same rules as [`GameConfig::validate`] for the interval: positive,
    /// whole milliseconds, and `epoch + interval` representable.
    pub fn new(epoch: DateTime<Utc>, interval: TimeDelta) -> Result<Self, ConfigError> {
        let interval_ms = interval_millis(epoch, interval)?;
        Ok(Self { epoch, interval_ms })
    }

    /// Build the schedule described by a config
    ///
    /// # Errors
    /// Same as [`RoundSchedule::new`].
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(config.epoch, config.interval)
    }

    #[must_use]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    #[must_use]
    pub fn interval(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.interval_ms)
    }

    /// 0-based index of the round live at `now`, clamped to zero
    #[must_use]
    pub fn round_index(&self, now: DateTime<Utc>) -> u64 {
        let elapsed = (now - self.epoch).num_milliseconds();
        elapsed.div_euclid(self.interval_ms).max(0) as u64
    }

    /// 1-based round number for display
    #[must_use]
    pub fn round_number(&self, now: DateTime<Utc>) -> u64 {
        self.round_index(now) + 1
    }

    /// Instant at which round `index` starts
    ///
    /// Saturates at the last representable instant.
    #[must_use]
    pub fn round_start(&self, index: u64) -> DateTime<Utc> {
        let offset = self.interval_ms.saturating_mul(index.min(i64::MAX as u64) as i64);
        TimeDelta::try_milliseconds(offset)
            .and_then(|offset| self.epoch.checked_add_signed(offset))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Time left until the next round starts, never negative
    #[must_use]
    pub fn time_until_next_round(&self, now: DateTime<Utc>) -> TimeDelta {
        let next = self.round_start(self.round_index(now) + 1);
        (next - now).max(TimeDelta::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 26, 17, 0, 0).unwrap()
    }

    fn schedule() -> RoundSchedule {
        RoundSchedule::new(t0(), TimeDelta::hours(4)).unwrap()
    }

    #[test]
    fn just_after_first_boundary_is_round_two() {
        let now = t0() + TimeDelta::hours(4) + TimeDelta::milliseconds(1);
        assert_eq!(schedule().round_index(now), 1);
        assert_eq!(schedule().round_number(now), 2);
    }

    #[test]
    fn before_epoch_clamps_to_first_round() {
        let now = t0() - TimeDelta::hours(1);
        assert_eq!(schedule().round_index(now), 0);
        assert_eq!(schedule().round_number(now), 1);
    }

    #[test]
    fn boundaries_are_inclusive_at_start() {
        let s = schedule();
        assert_eq!(s.round_index(t0()), 0);
        assert_eq!(s.round_index(t0() + TimeDelta::hours(4) - TimeDelta::milliseconds(1)), 0);
        assert_eq!(s.round_index(t0() + TimeDelta::hours(4)), 1);
        assert_eq!(s.round_index(t0() + TimeDelta::days(1)), 6);
    }

    #[test]
    fn index_is_monotonic() {
        let s = schedule();
        let mut last = 0;
        for minutes in (-600..3000).step_by(37) {
            let index = s.round_index(t0() + TimeDelta::minutes(minutes));
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn time_until_next_round() {
        let s = schedule();
        let now = t0() + TimeDelta::hours(5);
        assert_eq!(s.time_until_next_round(now), TimeDelta::hours(3));

        let at_boundary = t0() + TimeDelta::hours(8);
        assert_eq!(s.time_until_next_round(at_boundary), TimeDelta::hours(4));
    }

    #[test]
    fn time_until_next_round_before_epoch() {
        // Still in clamped round 0, which ends one interval after the epoch
        let s = schedule();
        let now = t0() - TimeDelta::hours(1);
        assert_eq!(s.time_until_next_round(now), TimeDelta::hours(5));
    }

    #[test]
    fn round_start_lines_up_with_index() {
        let s = schedule();
        for index in 0..10 {
            assert_eq!(s.round_index(s.round_start(index)), index);
        }
    }

    #[test]
    fn rejects_non_positive_interval() {
        assert!(RoundSchedule::new(t0(), TimeDelta::zero()).is_err());
        assert!(RoundSchedule::new(t0(), TimeDelta::hours(-1)).is_err());
        assert!(RoundSchedule::new(t0(), TimeDelta::microseconds(10)).is_err());
        assert!(RoundSchedule::new(t0(), TimeDelta::microseconds(1500)).is_err());
    }

    #[test]
    fn huge_interval_is_a_config_error() {
        let config = GameConfig {
            interval: TimeDelta::days(365 * 300_000),
            ..GameConfig::default()
        };
        assert!(matches!(
            RoundSchedule::from_config(&config),
            Err(ConfigError::IntervalOutOfRange(_))
        ));
    }

    #[test]
    fn validated_config_always_builds_a_schedule() {
        for interval in [
            TimeDelta::milliseconds(1),
            TimeDelta::minutes(1),
            TimeDelta::hours(4),
            TimeDelta::days(365 * 1000),
        ] {
            let config = GameConfig {
                interval,
                ..GameConfig::default()
            };
            assert!(config.validate().is_ok());
            let s = RoundSchedule::from_config(&config).unwrap();
            assert_eq!(s.interval(), interval);
        }
    }

    #[test]
    fn far_future_boundaries_saturate() {
        let s = RoundSchedule::new(t0(), TimeDelta::days(365 * 100_000)).unwrap();
        let now = t0() + TimeDelta::hours(1);
        assert_eq!(s.time_until_next_round(now), TimeDelta::days(365 * 100_000) - TimeDelta::hours(1));

        assert_eq!(s.round_start(u64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(schedule().round_start(u64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(
            schedule().time_until_next_round(DateTime::<Utc>::MAX_UTC),
            TimeDelta::zero()
        );
    }

    #[test]
    fn from_config_uses_config_values() {
        let config = GameConfig::default();
        let s = RoundSchedule::from_config(&config).unwrap();
        assert_eq!(s.epoch(), config.epoch);
        assert_eq!(s.interval(), config.interval);
    }
}
