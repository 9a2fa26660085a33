//! Session confidentiality layer.
//!
//! Implements the two primitives of the secure channel:
//! - Session nonces (random 8-byte identifiers)
//! - The seekable counter-seeded session cipher, with its keying
//!   material and the AES-128 default block primitive (`aes` feature)
//!
//! No integrity: the layer provides confidentiality only. There is no
//! MAC, and key exchange happens elsewhere.

pub mod material;
pub mod nonce;
pub mod stream;

#[cfg(feature = "aes")]
#[cfg_attr(docsrs, doc(cfg(feature = "aes")))]
pub mod block;

pub use self::material::SessionMaterial;
pub use self::nonce::Nonce;
pub use self::stream::SessionCipher;

#[cfg(feature = "aes")]
#[cfg_attr(docsrs, doc(cfg(feature = "aes")))]
pub use self::block::Aes128Block;
