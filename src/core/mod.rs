//! Core constants, error types, and the block-cipher trait.
//!
//! Always compiled; the rest of the crate builds on these.

pub mod constants;
pub mod error;
pub mod traits;

pub use self::constants::*;
pub use self::error::CryptoError;
pub use self::traits::BlockCipher;
