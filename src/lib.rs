//! **blockseal** implements blockwise authenticated stream
//! encryption with a keyed-hash integrity trailer.
//!
//! The plaintext is broken into blocks of a fixed size and each
//! block is encrypted separately with an AEAD scheme into one
//! *record*, `tag || ciphertext`. A running nonce, incremented
//! once per full-size block, binds every record to its position:
//! flipping a bit in any record or swapping two records fails
//! decryption. Every block but the last is exactly `blocksize`
//! bytes; the final block may be smaller, and a plaintext that is
//! an exact multiple of the block size gets no zero-length
//! terminal record.
//!
//! Per-record tags cannot see whole records vanishing from the
//! end of a stream. [`FileCryptor`] closes that hole: a keyed
//! hash (BLAKE2b) is computed over all record bytes and appended
//! to the stream as a fixed-size *trailer*. The format carries no
//! length field, so decryption locates the trailer by seeking to
//! `end - hashsize` and then reconciles fixed-size record reads
//! against the trailer boundary in a single forward pass.
//! Decryption sources must implement [`std::io::Seek`].
//!
//! [`StreamCryptor`] is the record layer alone, for transports
//! where truncation is detected by other means (or forward-only
//! pipes where seeking is impossible).
//!
//! The AEAD scheme is supplied by the caller through the [`aead`]
//! trait family (e.g. `chacha20poly1305`, `aes-gcm`). Both
//! parties must agree on the key, the base nonce, the block size,
//! and, for [`FileCryptor`], the hash key and digest size; none
//! of these are recoverable from the stream. A base nonce must
//! never be reused under one key for different plaintexts.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod buf;
mod cryptor;
mod error;
mod filecryptor;
mod hash;
mod key;
mod nonce;

pub use cryptor::*;
pub use error::*;
pub use filecryptor::*;
pub use hash::*;
pub use key::*;
pub use nonce::*;

/// The default plaintext block size used by [`StreamCryptor`] and
/// [`FileCryptor`].
pub const DEFAULT_BLOCK_SIZE: usize = 1 << 16;
