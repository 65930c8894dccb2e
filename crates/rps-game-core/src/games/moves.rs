//! Ordered set of move names for one session.

use crate::error::GameError;
use std::collections::HashSet;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Ordered, distinct move names; position defines circular adjacency
///
/// Construction is the only place the odd-count, minimum-size and uniqueness
/// rules are checked. The engines trust any `MoveSet` they are handed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and wrap a list of move names
    pub fn new<I, S>(moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(GameError::TooFewMoves(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(GameError::EvenMoveCount(moves.len()));
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false; a valid set holds at least three moves
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at the given 0-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// Position of a move, by exact case-sensitive match
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_set() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.get(1), Some("paper"));
        assert_eq!(moves.index_of("scissors"), Some(2));
        assert_eq!(moves.iter().collect::<Vec<_>>(), ["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_too_few_moves() {
        assert!(matches!(
            MoveSet::new(["rock"]),
            Err(GameError::TooFewMoves(1))
        ));
        assert!(matches!(
            MoveSet::new(Vec::<String>::new()),
            Err(GameError::TooFewMoves(0))
        ));
    }

    #[test]
    fn test_even_count_rejected() {
        assert!(matches!(
            MoveSet::new(["rock", "paper", "scissors", "lizard"]),
            Err(GameError::EvenMoveCount(4))
        ));
    }

    #[test]
    fn test_duplicates_rejected() {
        match MoveSet::new(["rock", "paper", "rock"]) {
            Err(GameError::DuplicateMove(name)) => assert_eq!(name, "rock"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let moves = MoveSet::new(["Rock", "rock", "ROCK"]).unwrap();
        assert_eq!(moves.index_of("rock"), Some(1));
        assert_eq!(moves.index_of("rOcK"), None);
    }

    #[test]
    fn test_out_of_range_get() {
        let moves = MoveSet::new(["a", "b", "c"]).unwrap();
        assert_eq!(moves.get(3), None);
    }
}
