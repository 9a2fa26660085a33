//! Counter-seeded stream cipher with a seekable keystream.
//!
//! The cipher turns a 16-byte block primitive into a byte-oriented
//! stream cipher. The keystream is seeded by encrypting a counter
//! block, and the counter can be repositioned word-wise so each
//! datagram decrypts independently of arrival order.
//!
//! Counter block layout (four independent 32-bit words):
//!
//! ```text
//! [ word0 LE (4) | word1 LE (4) | word2 LE (4) | word3 LE (4) ]
//! ```
//!
//! # Keystream semantics
//!
//! This is **not** textbook CTR mode, and the difference is
//! load-bearing for interoperability with deployed peers:
//!
//! - The counter seeds the pad once (at construction and on every
//!   [`SessionCipher::seek`]); sequential traffic never advances it.
//! - As bytes stream through, each ciphertext byte is written back into
//!   the pad slot it consumed. When the pad is exhausted it is
//!   re-encrypted *in place*, so the next keystream block is the
//!   encryption of the previous ciphertext block (cipher-feedback
//!   style), not of an incremented counter.
//!
//! Counter repositioning and pad refresh are therefore two independent
//! mechanisms, and both must stay exactly as they are: any change
//! produces a keystream existing peers cannot match.

use crate::core::{BLOCK_SIZE, BlockCipher, CryptoError, KEY_SIZE};
use crate::wire::{block_to_words, words_to_block};

use super::material::SessionMaterial;

/// Stream cipher for one logical secure channel.
///
/// Owns its key schedule and pad state exclusively; every operation
/// takes `&mut self`, so a channel's cipher is serialized by the borrow
/// checker. One instance per connection, used only by that connection's
/// processing path.
///
/// Confidentiality only: no authentication tag, no padding. Output
/// length always equals input length.
pub struct SessionCipher<C: BlockCipher> {
    /// Key schedule, immutable after construction
    cipher: C,
    /// IV: the base counter block all seeks are relative to
    base: [u8; BLOCK_SIZE],
    /// Working counter, changed only by `seek`
    counter: [u8; BLOCK_SIZE],
    /// Current keystream block, mutated by traffic
    pad: [u8; BLOCK_SIZE],
    /// Keystream bytes already consumed from `pad`
    pad_offset: usize,
}

impl<C: BlockCipher> SessionCipher<C> {
    /// Create a cipher session from a key and IV.
    ///
    /// Runs the block-cipher key schedule once and derives the first
    /// keystream block from the IV. Two instances built from the same
    /// key and IV are byte-identical in behavior.
    ///
    /// # Errors
    /// Returns `KeySetupFailed` if the primitive rejects the key.
    pub fn new(key: &[u8; KEY_SIZE], iv: &[u8; BLOCK_SIZE]) -> Result<Self, CryptoError> {
        let cipher = C::setup(key)?;
        let mut pad = *iv;
        cipher.encrypt_block(&mut pad);
        Ok(Self {
            cipher,
            base: *iv,
            counter: *iv,
            pad,
            pad_offset: 0,
        })
    }

    /// Create a cipher session from parsed keying material.
    ///
    /// # Errors
    /// Returns `KeySetupFailed` if the primitive rejects the key.
    pub fn from_material(material: &SessionMaterial) -> Result<Self, CryptoError> {
        Self::new(material.key(), material.iv())
    }

    /// Create a cipher session from the opaque wire blob (key followed
    /// by IV).
    ///
    /// A blob of the wrong length selects the zero-fallback material,
    /// not an error; see [`SessionMaterial::from_blob_or_zero`].
    ///
    /// # Errors
    /// Returns `KeySetupFailed` if the primitive rejects the key.
    pub fn from_blob(blob: &[u8]) -> Result<Self, CryptoError> {
        Self::from_material(&SessionMaterial::from_blob_or_zero(blob))
    }

    /// Reposition the keystream to the block identified by the IV plus
    /// four word offsets.
    ///
    /// Each offset is added to the corresponding little-endian 32-bit
    /// word of the IV with wrapping arithmetic; overflow is silent and
    /// intentional, mirroring the modular counter arithmetic of the
    /// wire protocol. Afterwards the cipher behaves exactly as if
    /// freshly constructed with the new counter as its IV.
    ///
    /// This is what makes the cipher usable for unordered transport:
    /// each packet carries its own counter words (sequence number,
    /// channel id, a high/low packet-counter split), and the receiver
    /// seeks straight to that packet's keystream.
    ///
    /// ```rust
    /// use seekcipher::prelude::*;
    ///
    /// let mut cipher = SessionCipher::<Aes128Block>::new(&[0; KEY_SIZE], &[0; BLOCK_SIZE])?;
    ///
    /// // Packet header carries the sequence number as a wire word
    /// let header = [0x2A, 0x00, 0x00, 0x00];
    /// let sequence = get_u32_le(&header)?;
    /// cipher.seek(sequence, 0, 0, 0);
    /// # Ok::<(), seekcipher::CryptoError>(())
    /// ```
    pub fn seek(&mut self, offset0: u32, offset1: u32, offset2: u32, offset3: u32) {
        let offsets = [offset0, offset1, offset2, offset3];
        let mut words = block_to_words(&self.base);
        for (word, offset) in words.iter_mut().zip(offsets) {
            *word = word.wrapping_add(offset);
        }
        self.counter = words_to_block(&words);

        self.pad = self.counter;
        self.cipher.encrypt_block(&mut self.pad);
        self.pad_offset = 0;
    }

    /// Encrypt a buffer in place.
    ///
    /// Each ciphertext byte is written back into the pad slot it
    /// consumed, so the pad always holds the running ciphertext block
    /// (see the module docs for why this must not change).
    pub fn encrypt_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            let encrypted = *byte ^ self.pad[self.pad_offset];
            self.pad[self.pad_offset] = encrypted;
            *byte = encrypted;
            self.advance_pad();
        }
    }

    /// Decrypt a buffer in place.
    ///
    /// Feeds the incoming ciphertext byte back into the pad, keeping
    /// the pad in lockstep with the encrypting peer.
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            let encrypted = *byte;
            *byte = encrypted ^ self.pad[self.pad_offset];
            self.pad[self.pad_offset] = encrypted;
            self.advance_pad();
        }
    }

    /// Encrypt a buffer, returning the ciphertext.
    ///
    /// Length-preserving: the output is exactly as long as the input.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out);
        out
    }

    /// Decrypt a buffer, returning the plaintext.
    ///
    /// Length-preserving: the output is exactly as long as the input.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out);
        out
    }

    /// Consume one pad byte; refresh the pad from its own contents when
    /// exhausted. The counter is never touched here.
    fn advance_pad(&mut self) {
        self.pad_offset += 1;
        if self.pad_offset == BLOCK_SIZE {
            self.cipher.encrypt_block(&mut self.pad);
            self.pad_offset = 0;
        }
    }
}
