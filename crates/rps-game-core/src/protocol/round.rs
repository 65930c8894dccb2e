//! One commit-reveal round between the player and the computer.
//!
//! A `Round` is created with the computer's move already fixed and committed.
//! The key stays private until `play` consumes the round with the player's
//! move, so the reveal can only ever follow the player's choice.

use super::{Outcome, RoundId};
use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;
use crate::games::{MoveSet, RuleEngine};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// A round whose computer move is committed but not yet revealed
#[derive(Debug)]
pub struct Round<'a> {
    id: RoundId,
    moves: &'a MoveSet,
    computer_index: usize,
    key: SecretKey,
    commitment: Commitment,
}

impl<'a> Round<'a> {
    /// Start a round using the OS CSPRNG for both the key and the move
    pub fn start(moves: &'a MoveSet, key_bits: u32) -> Result<Self, GameError> {
        Self::start_with(moves, key_bits, &mut OsRng)
    }

    /// Start a round drawing randomness from `rng`
    pub fn start_with<R>(moves: &'a MoveSet, key_bits: u32, rng: &mut R) -> Result<Self, GameError>
    where
        R: RngCore + CryptoRng,
    {
        let key = SecretKey::generate_with(key_bits, rng)?;
        let computer_index = pick_index(rng, moves.len())?;
        let commitment = Commitment::new(&key, Self::name_at(moves, computer_index)?);

        Ok(Self {
            id: RoundId::new(),
            moves,
            computer_index,
            key,
            commitment,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Digest to show the player before they choose
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Lock in the player's move, decide the round and reveal the key
    ///
    /// The player is side A of the returned outcome.
    pub fn play(self, human_move: &str) -> Result<RoundReveal, GameError> {
        let human_index = self
            .moves
            .index_of(human_move)
            .ok_or_else(|| GameError::UnknownMove(human_move.to_string()))?;
        let outcome =
            RuleEngine::decide_indices(human_index, self.computer_index, self.moves.len());

        Ok(RoundReveal {
            round_id: self.id,
            human_move: human_move.to_string(),
            computer_move: Self::name_at(self.moves, self.computer_index)?.to_string(),
            outcome,
            key: self.key,
            commitment: self.commitment,
        })
    }

    fn name_at(moves: &MoveSet, index: usize) -> Result<&str, GameError> {
        moves
            .get(index)
            .ok_or_else(|| GameError::UnknownMove(format!("#{}", index + 1)))
    }
}

/// Uniform index in `0..len` by rejection sampling
///
/// Randomness comes from `try_fill_bytes` so a failing source surfaces as an
/// error instead of a panic.
fn pick_index<R>(rng: &mut R, len: usize) -> Result<usize, GameError>
where
    R: RngCore + CryptoRng,
{
    let len = len as u64;
    let limit = u64::MAX - u64::MAX % len;
    loop {
        let mut bytes = [0u8; 8];
        rng.try_fill_bytes(&mut bytes)?;
        let value = u64::from_le_bytes(bytes);
        if value < limit {
            return Ok((value % len) as usize);
        }
    }
}

/// Everything the player needs to check the round after the fact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReveal {
    pub round_id: RoundId,
    pub human_move: String,
    pub computer_move: String,
    /// A is the player, B is the computer
    pub outcome: Outcome,
    pub key: SecretKey,
    pub commitment: Commitment,
}

impl RoundReveal {
    /// Recompute the commitment from the revealed key and computer move
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.computer_move)
    }
}
