// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Machine words shared by the SHA-2 parameter sets.
//!
//! SHA-256 operates on 32-bit words and SHA-512 on 64-bit words (FIPS 180-4
//! Section 3.1). Everything above this module is written once against
//! [`Word`] and instantiated for `u32` and `u64`.
//!
//! Byte order is explicit: words are always decoded from and encoded to
//! big-endian bytes, independent of the host.

use core::fmt::{Debug, LowerHex, UpperHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitXor, Not};

use zeroize::Zeroize;

/// Unsigned machine word used by a SHA-2 parameter set.
///
/// All arithmetic is modulo `2^BITS`; wrapping is the defined behaviour.
pub trait Word:
    Copy
    + Eq
    + Hash
    + Debug
    + LowerHex
    + UpperHex
    + Zeroize
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: usize;

    /// Additive identity
    const ZERO: Self;

    /// Block size in bytes: 16 words
    const BLOCK_LEN: usize = 16 * Self::BYTES;

    /// Width in bytes of the trailing message-length field: 2 words
    const LENGTH_FIELD_LEN: usize = 2 * Self::BYTES;

    /// Decode a word from exactly `BYTES` big-endian bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Encode the word as exactly `BYTES` big-endian bytes into `out`.
    fn write_be_slice(self, out: &mut [u8]);

    /// `self + rhs mod 2^BITS`
    fn wrapping_add(self, rhs: Self) -> Self;

    /// ROTR^n(x) per FIPS 180-4 Section 3.2
    fn rotr(self, n: u32) -> Self;

    /// SHR^n(x) per FIPS 180-4 Section 3.2
    fn shr(self, n: u32) -> Self;
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = core::mem::size_of::<$ty>();
            const ZERO: Self = 0;

            #[inline(always)]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                <$ty>::from_be_bytes(raw)
            }

            #[inline(always)]
            fn write_be_slice(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_be_bytes());
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                self >> n
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);
