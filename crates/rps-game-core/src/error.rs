//! Error type shared by the rule engine and the commitment engine.

use thiserror::Error;

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("At least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("An odd number of moves is required, got {0}")]
    EvenMoveCount(usize),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Key length must be at least 1 bit")]
    InvalidKeyLength,

    #[error("Invalid secret key: {0}")]
    InvalidKey(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Secure random source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}
