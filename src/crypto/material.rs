//! Session keying material.
//!
//! One cipher session is keyed by a 16-byte block-cipher key and a
//! 16-byte IV, carried on the wire as a single opaque
//! [`SESSION_BLOB_SIZE`]-byte blob (key followed by IV, verbatim).

use zeroize::Zeroize;

use crate::core::{BLOCK_SIZE, KEY_SIZE, SESSION_BLOB_SIZE};

/// Raw keying material for one cipher session.
///
/// The key half is zeroized on drop.
#[derive(Clone)]
pub struct SessionMaterial {
    key: [u8; KEY_SIZE],
    iv: [u8; BLOCK_SIZE],
}

impl SessionMaterial {
    /// Create from a key and IV.
    pub fn new(key: [u8; KEY_SIZE], iv: [u8; BLOCK_SIZE]) -> Self {
        Self { key, iv }
    }

    /// Parse the wire blob: key followed by IV, exactly
    /// [`SESSION_BLOB_SIZE`] bytes.
    ///
    /// # Zero-fallback policy
    /// Any other length yields the all-zero key and all-zero IV instead
    /// of failing. Malformed or absent session material thus degrades to
    /// a keystream both peers still agree on; it does **not** protect
    /// the traffic. Callers that must reject bad blobs length-check
    /// before calling.
    pub fn from_blob_or_zero(blob: &[u8]) -> Self {
        let mut key = [0u8; KEY_SIZE];
        let mut iv = [0u8; BLOCK_SIZE];
        if blob.len() == SESSION_BLOB_SIZE {
            key.copy_from_slice(&blob[..KEY_SIZE]);
            iv.copy_from_slice(&blob[KEY_SIZE..]);
        }
        Self { key, iv }
    }

    /// Serialize to the wire blob (key followed by IV).
    ///
    /// # Security
    /// The result contains live key material; handle accordingly.
    pub fn to_blob(&self) -> [u8; SESSION_BLOB_SIZE] {
        let mut blob = [0u8; SESSION_BLOB_SIZE];
        blob[..KEY_SIZE].copy_from_slice(&self.key);
        blob[KEY_SIZE..].copy_from_slice(&self.iv);
        blob
    }

    /// Get the block-cipher key.
    ///
    /// # Security
    /// Handle with care - this exposes sensitive key material.
    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// Get the IV.
    pub fn iv(&self) -> &[u8; BLOCK_SIZE] {
        &self.iv
    }
}

impl Drop for SessionMaterial {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}
