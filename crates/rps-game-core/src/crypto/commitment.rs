//! HMAC commitment for the commit-reveal scheme.

use super::SecretKey;
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a move under the given key
    pub fn new(key: &SecretKey, action: &str) -> Self {
        let mac = Self::keyed(key, action);
        Self(mac.finalize().into_bytes().into())
    }

    /// Parse a 64-character hex digest
    pub fn from_hex(hex_str: &str) -> Result<Self, GameError> {
        let bytes =
            hex::decode(hex_str.trim()).map_err(|e| GameError::InvalidDigest(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| GameError::InvalidDigest("expected 32 bytes".to_string()))?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and move produce this commitment
    pub fn verify(&self, key: &SecretKey, action: &str) -> bool {
        Self::keyed(key, action).verify_slice(&self.0).is_ok()
    }

    fn keyed(key: &SecretKey, action: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(key.mac_key()).expect("HMAC accepts keys of any length");
        mac.update(action.as_bytes());
        mac
    }
}

impl FromStr for Commitment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Commitment {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Commitment> for String {
    fn from(commitment: Commitment) -> Self {
        commitment.to_string()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
