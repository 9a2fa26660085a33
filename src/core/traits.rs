//! The block-cipher capability trait.
//!
//! The stream construction never implements a block cipher itself; it
//! consumes one through this interface so any vetted implementation can
//! be substituted. [`crate::crypto::Aes128Block`] is the bundled default
//! (behind the `aes` feature).

use super::constants::{BLOCK_SIZE, KEY_SIZE};
use super::error::CryptoError;

/// A keyed, fixed-width deterministic permutation consumed by the
/// session cipher.
///
/// # Requirements
///
/// - `encrypt_block` MUST be deterministic: same schedule, same input,
///   same output, across calls and across processes
/// - `encrypt_block` MUST have no side effects beyond writing `block`
/// - `setup` MUST NOT yield a usable object when it rejects the key
///
/// # Example
///
/// ```rust
/// use seekcipher::core::{BlockCipher, CryptoError, BLOCK_SIZE, KEY_SIZE};
///
/// struct XorCipher {
///     key: [u8; KEY_SIZE],
/// }
///
/// impl BlockCipher for XorCipher {
///     fn setup(key: &[u8; KEY_SIZE]) -> Result<Self, CryptoError> {
///         Ok(Self { key: *key })
///     }
///
///     fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
///         for (byte, key_byte) in block.iter_mut().zip(&self.key) {
///             *byte ^= key_byte;
///         }
///     }
/// }
/// ```
pub trait BlockCipher: Sized {
    /// Run the key schedule once for a session.
    ///
    /// # Errors
    /// Returns `KeySetupFailed` if the primitive rejects the key
    /// material (e.g., an unsupported length at the FFI boundary).
    fn setup(key: &[u8; KEY_SIZE]) -> Result<Self, CryptoError>;

    /// Encrypt a single block in place.
    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]);
}
