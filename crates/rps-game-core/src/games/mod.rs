//! Move sets and the circular win rule.

mod moves;
mod rules;

pub use moves::MoveSet;
pub use rules::{Relation, RelationTable, RuleEngine};
