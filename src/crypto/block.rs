//! AES-128 block-cipher adapter.
//!
//! The crate never implements AES itself; this is a thin adapter over
//! the vetted `aes` crate. AES-128 matches the protocol's fixed sizes
//! exactly: 16-byte key, 16-byte block.

use aes::Aes128;
use aes::cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray};

use crate::core::{BLOCK_SIZE, BlockCipher, CryptoError, KEY_SIZE};

/// AES-128 as the session cipher's block primitive.
pub struct Aes128Block {
    inner: Aes128,
}

impl BlockCipher for Aes128Block {
    fn setup(key: &[u8; KEY_SIZE]) -> Result<Self, CryptoError> {
        let inner = Aes128::new_from_slice(key).map_err(|_| CryptoError::KeySetupFailed)?;
        Ok(Self { inner })
    }

    fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        self.inner
            .encrypt_block(GenericArray::from_mut_slice(block));
    }
}
