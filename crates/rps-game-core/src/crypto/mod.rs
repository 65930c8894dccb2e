//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey, a fresh high-entropy key drawn from the OS CSPRNG each round
//! - Commitment, the HMAC-SHA256 digest of a move under that key

mod commitment;
mod secret_key;

pub use commitment::Commitment;
pub use secret_key::{SecretKey, DEFAULT_KEY_BITS};
