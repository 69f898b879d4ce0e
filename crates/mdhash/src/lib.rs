// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 and SHA-512 over one Merkle-Damgård pipeline
//!
//! Implementation per FIPS 180-4. A message is padded into fixed-size
//! blocks, each block is expanded into a message schedule, and the schedule
//! is folded into an 8-word running state by the round function. The two
//! hashes differ only in their parameter set ([`Variant`]).
//!
//! Input is any [`ByteSource`]; its total length need not be known in
//! advance. All intermediate buffers are zeroized on drop.
//!
//! ```
//! let digest = mdhash::sha256(b"abc");
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod block;
mod compress;
mod consts;
mod digest;
#[cfg(feature = "std")]
mod error;
mod hash;
mod padding;
mod reader;
mod schedule;
mod source;
mod variant;
mod word;

pub use block::{WORDS_PER_BLOCK, extract_words};
pub use compress::{State, big_sigma, bsig0, bsig1, ch, compress, maj};
pub use consts::{
    H0_256, H0_512, K256, K512, SHA256_BLOCK_LEN, SHA256_HASH_LEN, SHA256_ROUNDS,
    SHA512_BLOCK_LEN, SHA512_HASH_LEN, SHA512_ROUNDS,
};
pub use digest::Digest;
#[cfg(feature = "std")]
pub use error::HashError;
#[cfg(feature = "std")]
pub use hash::{hash_file, hash_reader};
pub use hash::{hash, hash_source, sha256, sha512};
pub use padding::{PadState, Padder};
pub use reader::{BlockReader, pad_message};
pub use schedule::{Schedule, small_sigma, ssig0, ssig1};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, SliceSource};
pub use variant::{BigSigma, Sha256, Sha512, SmallSigma, Variant};
pub use word::Word;
