//! Round types and the per-round commit-reveal record.

mod round;
mod types;

pub use round::{Round, RoundReveal};
pub use types::{Outcome, RoundId};
