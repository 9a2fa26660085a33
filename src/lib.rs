//! # seekcipher
//!
//! Seekable counter-seeded session cipher and session nonces for
//! packet-oriented transports.
//!
//! The crate turns a 16-byte block cipher into a synchronous stream
//! cipher whose keystream can be repositioned to an arbitrary block
//! offset, so out-of-order datagrams each decrypt independently:
//!
//! - **Seekable**: each packet carries four 32-bit counter words; the
//!   receiver jumps straight to that packet's keystream
//! - **Pluggable**: the block cipher is a capability trait; AES-128 is
//!   the bundled default
//! - **Wire-exact**: reproduces the deployed keystream semantics
//!   bit-for-bit, including the non-textbook pad feedback
//! - **Confidentiality only**: no MAC, no key exchange, no padding
//!
//! ## Feature Flags
//!
//! - `aes` (default): AES-128 default block cipher via the `aes` crate
//!
//! ## Modules
//!
//! - [`core`]: constants, error types, the block-cipher trait
//! - [`crypto`]: nonces, keying material, the session cipher
//! - [`wire`]: fixed-width little-endian serialization helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use seekcipher::prelude::*;
//!
//! let key = [0x11u8; KEY_SIZE];
//! let iv = [0x22u8; BLOCK_SIZE];
//!
//! let mut sender = SessionCipher::<Aes128Block>::new(&key, &iv)?;
//! let mut receiver = SessionCipher::<Aes128Block>::new(&key, &iv)?;
//!
//! // Each packet seeks to its own counter position, so arrival order
//! // does not matter.
//! sender.seek(7, 0, 0, 0);
//! let ciphertext = sender.encrypt(b"packet seven");
//!
//! receiver.seek(7, 0, 0, 0);
//! assert_eq!(receiver.decrypt(&ciphertext), b"packet seven");
//! # Ok::<(), seekcipher::CryptoError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Session confidentiality layer
pub mod crypto;

// Wire serialization helpers
pub mod wire;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core constants, errors, and the block-cipher trait
    pub use crate::core::*;

    // Session cipher and nonce types
    pub use crate::crypto::*;

    // Wire helpers
    pub use crate::wire::{block_to_words, get_u32_le, put_u32_le, words_to_block};
}

// Re-export commonly used items at crate root
pub use crate::core::{BLOCK_SIZE, BlockCipher, CryptoError, KEY_SIZE, NONCE_SIZE, SESSION_BLOB_SIZE};
pub use crate::crypto::{Nonce, SessionCipher, SessionMaterial};

#[cfg(feature = "aes")]
#[cfg_attr(docsrs, doc(cfg(feature = "aes")))]
pub use crate::crypto::Aes128Block;
