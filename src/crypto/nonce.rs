//! Session nonces.
//!
//! A nonce is an 8-byte random value identifying a cipher session. It
//! travels as exactly [`NONCE_SIZE`] raw bytes, no framing, no
//! endianness conversion.

use std::fmt;

use rand::{CryptoRng, RngCore, rngs::OsRng};

use crate::core::{CryptoError, NONCE_SIZE};

/// Fixed-width random session identifier.
///
/// Plain value semantics: copied freely, compared byte-wise.
///
/// # Security
/// Equality is ordinary byte comparison, **not** constant time. The
/// protocol only compares nonces for session demultiplexing; if a
/// caller ever compares them in an authentication-sensitive path, that
/// is a timing side channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Generate a new random nonce from the OS entropy source.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a new random nonce from a caller-supplied source.
    ///
    /// Lets tests substitute a seeded generator; production callers use
    /// [`Nonce::generate`].
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut id = [0u8; NONCE_SIZE];
        rng.fill_bytes(&mut id);
        Self(id)
    }

    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Deserialize from a wire buffer of exactly [`NONCE_SIZE`] bytes.
    ///
    /// # Errors
    /// Returns `LengthMismatch` for any other length; the input is never
    /// truncated or padded.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != NONCE_SIZE {
            return Err(CryptoError::LengthMismatch {
                expected: NONCE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut id = [0u8; NONCE_SIZE];
        id.copy_from_slice(bytes);
        Ok(Self(id))
    }

    /// Get the raw bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_unique() {
        let a = Nonce::generate();
        let b = Nonce::generate();

        // Different with overwhelming probability
        assert_ne!(a, b);
        assert_eq!(a.as_bytes().len(), NONCE_SIZE);
    }

    #[test]
    fn test_generate_with_seeded_rng() {
        let a = Nonce::generate_with(&mut StdRng::seed_from_u64(7));
        let b = Nonce::generate_with(&mut StdRng::seed_from_u64(7));
        let c = Nonce::generate_with(&mut StdRng::seed_from_u64(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let nonce = Nonce::from_bytes(bytes);
        assert_eq!(nonce.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_slice_roundtrip() {
        let nonce = Nonce::generate();
        let parsed = Nonce::from_slice(nonce.as_ref()).unwrap();
        assert_eq!(nonce, parsed);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Nonce::from_slice(&[0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            CryptoError::LengthMismatch {
                expected: NONCE_SIZE,
                actual: 5
            }
        );

        assert!(Nonce::from_slice(&[0u8; 9]).is_err());
        assert!(Nonce::from_slice(&[]).is_err());
    }

    #[test]
    fn test_display_hex() {
        let nonce = Nonce::from_bytes([0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03]);
        assert_eq!(nonce.to_string(), hex::encode(nonce.as_bytes()));
        assert_eq!(nonce.to_string(), "deadbeef00010203");
    }
}
