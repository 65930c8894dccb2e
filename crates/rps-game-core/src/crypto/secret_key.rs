//! Per-round secret key for the commitment.

use crate::error::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default key length in bits
pub const DEFAULT_KEY_BITS: u32 = 256;

/// Secret key, held as its lowercase hex rendering
///
/// The hex text is what gets shown to the player on reveal, and its UTF-8
/// bytes are the HMAC key. Anyone can therefore recheck a commitment with a
/// stock HMAC-SHA256 tool by pasting the key as text.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretKey(String);

impl SecretKey {
    /// Generate a fresh key of `ceil(bits / 8)` bytes from the OS CSPRNG
    pub fn generate(bits: u32) -> Result<Self, GameError> {
        Self::generate_with(bits, &mut OsRng)
    }

    /// Generate a fresh key from the given cryptographic RNG
    ///
    /// Failures of the random source are propagated, never papered over.
    pub fn generate_with<R>(bits: u32, rng: &mut R) -> Result<Self, GameError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if bits == 0 {
            return Err(GameError::InvalidKeyLength);
        }
        let mut bytes = vec![0u8; (bits as usize).div_ceil(8)];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(hex::encode(bytes)))
    }

    /// Parse a previously revealed key
    pub fn from_hex(hex_str: &str) -> Result<Self, GameError> {
        let bytes =
            hex::decode(hex_str.trim()).map_err(|e| GameError::InvalidKey(e.to_string()))?;
        if bytes.is_empty() {
            return Err(GameError::InvalidKey("empty key".to_string()));
        }
        Ok(Self(hex::encode(bytes)))
    }

    /// Lowercase hex rendering, exactly as revealed to the player
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Number of random bytes behind the key
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }

    /// Key material fed to HMAC
    pub(crate) fn mac_key(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl TryFrom<String> for SecretKey {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<SecretKey> for String {
    fn from(key: SecretKey) -> Self {
        key.0
    }
}

// Keeps keys out of debug logs until they are deliberately revealed.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes)", self.byte_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_key_is_32_bytes() {
        let key = SecretKey::generate(DEFAULT_KEY_BITS).unwrap();
        assert_eq!(key.byte_len(), 32);
        assert_eq!(key.as_hex().len(), 64);
        assert_eq!(hex::decode(key.as_hex()).unwrap().len(), 32);
    }

    #[test]
    fn test_partial_bytes_round_up() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(SecretKey::generate_with(1, &mut rng).unwrap().byte_len(), 1);
        assert_eq!(SecretKey::generate_with(129, &mut rng).unwrap().byte_len(), 17);
        assert_eq!(SecretKey::generate_with(136, &mut rng).unwrap().byte_len(), 17);
    }

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_entropy_failure_propagates() {
        assert!(matches!(
            SecretKey::generate_with(256, &mut BrokenRng),
            Err(GameError::Entropy(_))
        ));
    }

    #[test]
    fn test_zero_bits_rejected() {
        assert!(matches!(
            SecretKey::generate(0),
            Err(GameError::InvalidKeyLength)
        ));
    }

    #[test]
    fn test_successive_keys_differ() {
        let key1 = SecretKey::generate(DEFAULT_KEY_BITS).unwrap();
        let key2 = SecretKey::generate(DEFAULT_KEY_BITS).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_hex_is_lowercase() {
        let key = SecretKey::generate(DEFAULT_KEY_BITS).unwrap();
        assert!(key
            .as_hex()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let key1 = SecretKey::generate_with(256, &mut StdRng::seed_from_u64(42)).unwrap();
        let key2 = SecretKey::generate_with(256, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_from_hex_normalizes_case() {
        let key = SecretKey::from_hex(" ABCDEF01 ").unwrap();
        assert_eq!(key.as_hex(), "abcdef01");
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            SecretKey::from_hex("xyz"),
            Err(GameError::InvalidKey(_))
        ));
        assert!(matches!(SecretKey::from_hex(""), Err(GameError::InvalidKey(_))));
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SecretKey::from_hex("deadbeef").unwrap();
        let debug = format!("{:?}", key);
        assert_eq!(debug, "SecretKey(4 bytes)");
        assert!(!debug.contains("deadbeef"));
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let key = SecretKey::from_hex("deadbeef").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"deadbeef\"");
        let back: SecretKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<SecretKey>("\"nothex\"").is_err());
    }
}
