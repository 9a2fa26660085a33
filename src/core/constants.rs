//! Fixed contract values shared with wire peers.
//!
//! These sizes are fixed by the wire protocol and MUST NOT be changed:
//! peers using different values cannot interoperate.

/// Block-cipher key size.
pub const KEY_SIZE: usize = 16;

/// Block-cipher block size (also the keystream pad and counter width).
pub const BLOCK_SIZE: usize = 16;

/// Session nonce size.
pub const NONCE_SIZE: usize = 8;

/// Session material blob size (key followed by IV).
pub const SESSION_BLOB_SIZE: usize = 2 * KEY_SIZE;

/// Number of 32-bit words in a counter block.
pub const COUNTER_WORDS: usize = 4;

/// Width of one counter word in bytes.
pub const WORD_SIZE: usize = 4;
