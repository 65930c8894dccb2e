//! Generalized rock-paper-scissors rule engine.
//!
//! Moves sit on a circle in the order given. For a move at index `i`, the
//! `N/2` moves that follow it (wrapping around) beat it and the `N/2` moves
//! that precede it lose to it. With `[rock, paper, scissors]` this is the
//! classic game.

use super::MoveSet;
use crate::error::GameError;
use crate::protocol::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against another, from the first move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Win,
    Lose,
    Draw,
}

impl Relation {
    /// Relation of the move at `i` against the move at `j` in a circle of `n`
    pub(crate) fn between(i: usize, j: usize, n: usize) -> Relation {
        if i == j {
            return Relation::Draw;
        }
        let distance = (j + n - i) % n;
        // Non-strict on purpose: matches the reference rule for odd `n`.
        if distance <= n / 2 {
            Relation::Lose
        } else {
            Relation::Win
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Win => "Win",
            Relation::Lose => "Lose",
            Relation::Draw => "Draw",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// N x N win/lose/draw matrix; entry (i, j) is move i against move j
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationTable {
    size: usize,
    cells: Vec<Relation>,
}

impl RelationTable {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Relation of move `i` against move `j`
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Relation {
        assert!(i < self.size && j < self.size, "index out of range");
        self.cells[i * self.size + j]
    }

    /// All relations of move `i` against every move, in move-set order
    pub fn row(&self, i: usize) -> &[Relation] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Relation]> {
        self.cells.chunks(self.size)
    }
}

/// Rule engine for an arbitrary odd-sized move set
pub struct RuleEngine;

impl RuleEngine {
    /// Precompute the full relation table for a move set
    pub fn build_relation_table(moves: &MoveSet) -> RelationTable {
        let n = moves.len();
        let cells = (0..n)
            .flat_map(|i| (0..n).map(move |j| Relation::between(i, j, n)))
            .collect();
        RelationTable { size: n, cells }
    }

    /// Decide a match between `move_a` and `move_b`
    ///
    /// Both names must be present in `moves`; anything else is an
    /// `UnknownMove` error rather than a silent draw.
    pub fn decide(moves: &MoveSet, move_a: &str, move_b: &str) -> Result<Outcome, GameError> {
        let a = moves
            .index_of(move_a)
            .ok_or_else(|| GameError::UnknownMove(move_a.to_string()))?;
        let b = moves
            .index_of(move_b)
            .ok_or_else(|| GameError::UnknownMove(move_b.to_string()))?;

        Ok(Self::decide_indices(a, b, moves.len()))
    }

    /// Decide a match between two already-resolved positions
    pub(crate) fn decide_indices(a: usize, b: usize, n: usize) -> Outcome {
        match Relation::between(a, b, n) {
            Relation::Win => Outcome::AWins,
            Relation::Lose => Outcome::BWins,
            Relation::Draw => Outcome::Draw,
        }
    }
}
