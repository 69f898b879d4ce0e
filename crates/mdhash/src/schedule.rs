// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Sections 6.2.2 (step 1) and 6.4.2 (step 1)

use zeroize::Zeroize;

use crate::block::WORDS_PER_BLOCK;
use crate::consts::MAX_ROUNDS;
use crate::variant::{SmallSigma, Variant};
use crate::word::Word;

/// ROTR^a(x) ⊕ ROTR^b(x) ⊕ SHR^c(x)
#[inline(always)]
pub fn small_sigma<W: Word>(x: W, sigma: SmallSigma) -> W {
    x.rotr(sigma.rotr[0]) ^ x.rotr(sigma.rotr[1]) ^ x.shr(sigma.shr)
}

/// σ0 of the variant
#[inline(always)]
pub fn ssig0<V: Variant>(x: V::Word) -> V::Word {
    small_sigma(x, V::SSIG0)
}

/// σ1 of the variant
#[inline(always)]
pub fn ssig1<V: Variant>(x: V::Word) -> V::Word {
    small_sigma(x, V::SSIG1)
}

/// Expanded message schedule W[0..ROUNDS] of one block.
///
/// Rebuilt from scratch for every block; wiped on drop.
pub struct Schedule<V: Variant> {
    w: [V::Word; MAX_ROUNDS],
}

impl<V: Variant> Default for Schedule<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Schedule<V> {
    /// All-zero schedule
    pub fn new() -> Self {
        Self {
            w: [<V::Word as Word>::ZERO; MAX_ROUNDS],
        }
    }

    /// Expand 16 message words into `ROUNDS` schedule words.
    ///
    /// W[t] = M[t]                                        for 0  <= t < 16
    /// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]  for 16 <= t < ROUNDS
    pub fn expand(&mut self, m: &[V::Word; WORDS_PER_BLOCK]) {
        let w = &mut self.w[..V::ROUNDS];

        w[..WORDS_PER_BLOCK].copy_from_slice(m);

        for t in WORDS_PER_BLOCK..V::ROUNDS {
            w[t] = ssig1::<V>(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0::<V>(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }
    }

    /// W[0..ROUNDS]
    pub fn words(&self) -> &[V::Word] {
        &self.w[..V::ROUNDS]
    }
}

impl<V: Variant> Drop for Schedule<V> {
    fn drop(&mut self) {
        self.w.zeroize();
    }
}
