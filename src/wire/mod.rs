//! Fixed-width little-endian serialization helpers.
//!
//! All multi-byte integers in the wire protocol are little-endian. The
//! counter-block helpers here are the endianness normalization the
//! session cipher applies before and after its word-wise seek
//! arithmetic; the slice helpers are what framing callers use to pull
//! packet counter words off the wire.

use crate::core::{BLOCK_SIZE, COUNTER_WORDS, CryptoError, WORD_SIZE};

/// Read a little-endian `u32` from the front of `buf`.
///
/// # Errors
/// Returns `LengthMismatch` if `buf` holds fewer than 4 bytes.
pub fn get_u32_le(buf: &[u8]) -> Result<u32, CryptoError> {
    if buf.len() < WORD_SIZE {
        return Err(CryptoError::LengthMismatch {
            expected: WORD_SIZE,
            actual: buf.len(),
        });
    }
    let mut raw = [0u8; WORD_SIZE];
    raw.copy_from_slice(&buf[..WORD_SIZE]);
    Ok(u32::from_le_bytes(raw))
}

/// Write a little-endian `u32` to the front of `buf`.
///
/// # Errors
/// Returns `LengthMismatch` if `buf` holds fewer than 4 bytes.
pub fn put_u32_le(buf: &mut [u8], value: u32) -> Result<(), CryptoError> {
    if buf.len() < WORD_SIZE {
        return Err(CryptoError::LengthMismatch {
            expected: WORD_SIZE,
            actual: buf.len(),
        });
    }
    buf[..WORD_SIZE].copy_from_slice(&value.to_le_bytes());
    Ok(())
}

/// Decode a counter block into its four little-endian 32-bit words.
pub fn block_to_words(block: &[u8; BLOCK_SIZE]) -> [u32; COUNTER_WORDS] {
    let mut words = [0u32; COUNTER_WORDS];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(WORD_SIZE)) {
        let mut raw = [0u8; WORD_SIZE];
        raw.copy_from_slice(chunk);
        *word = u32::from_le_bytes(raw);
    }
    words
}

/// Re-encode four 32-bit words into a counter block, little-endian.
pub fn words_to_block(words: &[u32; COUNTER_WORDS]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    for (chunk, word) in block.chunks_exact_mut(WORD_SIZE).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    block
}
