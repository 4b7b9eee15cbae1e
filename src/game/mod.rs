//! Round engine
//!
//! Schedule, clock abstraction and the per-round session state machine.

mod clock;
mod error;
mod schedule;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{HintError, InputError, StartError};
pub use schedule::RoundSchedule;
pub use session::{Hint, Outcome, RoundSession, RoundSnapshot, Submission};
