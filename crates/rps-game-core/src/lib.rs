//! RPS Game Core Library
//!
//! This crate provides the rule engine, the commit-reveal primitives, and the
//! round record for a provably fair rock-paper-scissors game played over any
//! odd number of moves.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, SecretKey, DEFAULT_KEY_BITS};
pub use error::GameError;
pub use games::{MoveSet, Relation, RelationTable, RuleEngine};
pub use protocol::{Outcome, Round, RoundId, RoundReveal};
