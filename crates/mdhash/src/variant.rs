// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 parameter sets.
//!
//! Both supported hashes share one pipeline (padding, word extraction,
//! schedule expansion, compression). A [`Variant`] supplies the pieces that
//! differ: word width, round count, constant tables and the rotation/shift
//! amounts of the four sigma functions.

use crate::consts::{
    H0_256, H0_512, K256, K512, SHA256_BLOCK_LEN, SHA256_HASH_LEN, SHA256_ROUNDS,
    SHA512_BLOCK_LEN, SHA512_HASH_LEN, SHA512_ROUNDS,
};
use crate::word::Word;

/// Rotation amounts of an upper-case sigma: ROTR^a ⊕ ROTR^b ⊕ ROTR^c
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigSigma {
    /// Right-rotation amounts
    pub rotr: [u32; 3],
}

/// Amounts of a lower-case sigma: ROTR^a ⊕ ROTR^b ⊕ SHR^c
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallSigma {
    /// Right-rotation amounts
    pub rotr: [u32; 2],
    /// Right-shift amount
    pub shr: u32,
}

/// A SHA-2 parameter set.
pub trait Variant: Sized + 'static {
    /// Machine word the variant operates on
    type Word: Word;

    /// Display name, e.g. `"SHA-256"`
    const NAME: &'static str;

    /// Number of compression rounds (and schedule length)
    const ROUNDS: usize;

    /// Round constants, exactly `ROUNDS` entries
    const K: &'static [Self::Word];

    /// Initial hash value H(0)
    const H0: [Self::Word; 8];

    /// Σ0, applied to `a` in every round
    const BSIG0: BigSigma;

    /// Σ1, applied to `e` in every round
    const BSIG1: BigSigma;

    /// σ0, applied to `W[t-15]` during schedule expansion
    const SSIG0: SmallSigma;

    /// σ1, applied to `W[t-2]` during schedule expansion
    const SSIG1: SmallSigma;

    /// Block size in bytes
    const BLOCK_LEN: usize = <Self::Word as Word>::BLOCK_LEN;

    /// Digest size in bytes
    const HASH_LEN: usize = 8 * <Self::Word as Word>::BYTES;
}

/// SHA-256: 32-bit words, 64 rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sha256;

/// SHA-512: 64-bit words, 80 rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sha512;

impl Variant for Sha256 {
    type Word = u32;

    const NAME: &'static str = "SHA-256";
    const ROUNDS: usize = SHA256_ROUNDS;
    const K: &'static [u32] = &K256;
    const H0: [u32; 8] = H0_256;

    const BSIG0: BigSigma = BigSigma { rotr: [2, 13, 22] };
    const BSIG1: BigSigma = BigSigma { rotr: [6, 11, 25] };
    const SSIG0: SmallSigma = SmallSigma {
        rotr: [7, 18],
        shr: 3,
    };
    const SSIG1: SmallSigma = SmallSigma {
        rotr: [17, 19],
        shr: 10,
    };
}

impl Variant for Sha512 {
    type Word = u64;

    const NAME: &'static str = "SHA-512";
    const ROUNDS: usize = SHA512_ROUNDS;
    const K: &'static [u64] = &K512;
    const H0: [u64; 8] = H0_512;

    const BSIG0: BigSigma = BigSigma { rotr: [28, 34, 39] };
    const BSIG1: BigSigma = BigSigma { rotr: [14, 18, 41] };
    const SSIG0: SmallSigma = SmallSigma {
        rotr: [1, 8],
        shr: 7,
    };
    const SSIG1: SmallSigma = SmallSigma {
        rotr: [19, 61],
        shr: 6,
    };
}

const _: () = {
    assert!(<Sha256 as Variant>::BLOCK_LEN == SHA256_BLOCK_LEN);
    assert!(<Sha256 as Variant>::HASH_LEN == SHA256_HASH_LEN);
    assert!(<Sha512 as Variant>::BLOCK_LEN == SHA512_BLOCK_LEN);
    assert!(<Sha512 as Variant>::HASH_LEN == SHA512_HASH_LEN);
    assert!(<Sha256 as Variant>::K.len() == <Sha256 as Variant>::ROUNDS);
    assert!(<Sha512 as Variant>::K.len() == <Sha512 as Variant>::ROUNDS);
};
