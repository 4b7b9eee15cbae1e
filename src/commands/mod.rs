//! Command implementations

pub mod evaluate;
pub mod schedule;
pub mod simple;
pub mod today;

pub use evaluate::{EvaluateError, EvaluateResult, evaluate_words};
pub use schedule::{ScheduledRound, upcoming_rounds};
pub use simple::run_simple;
pub use today::{TodayInfo, today_info};
