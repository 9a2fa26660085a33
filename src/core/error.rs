//! Error types for the session cipher layer.

use thiserror::Error;

/// Errors in the crypto layer.
///
/// Stream operations (`encrypt`, `decrypt`, `seek`) are total and never
/// fail; errors only arise at construction and deserialization time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The block-cipher primitive rejected the supplied key material.
    /// Fatal to the session under construction.
    #[error("block cipher rejected key material")]
    KeySetupFailed,

    /// A fixed-width field had the wrong length on deserialization.
    /// Recoverable: the caller rejects the packet or handshake message.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}
