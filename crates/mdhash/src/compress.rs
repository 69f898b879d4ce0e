// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 compression function per FIPS 180-4 Sections 6.2.2 and 6.4.2

use zeroize::Zeroize;

use crate::block::extract_words;
use crate::schedule::Schedule;
use crate::variant::{BigSigma, Variant};
use crate::word::Word;

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
#[inline(always)]
pub fn ch<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
#[inline(always)]
pub fn maj<W: Word>(x: W, y: W, z: W) -> W {
    (x & y) ^ (x & z) ^ (y & z)
}

/// ROTR^a(x) ⊕ ROTR^b(x) ⊕ ROTR^c(x)
#[inline(always)]
pub fn big_sigma<W: Word>(x: W, sigma: BigSigma) -> W {
    x.rotr(sigma.rotr[0]) ^ x.rotr(sigma.rotr[1]) ^ x.rotr(sigma.rotr[2])
}

/// Σ0 of the variant
#[inline(always)]
pub fn bsig0<V: Variant>(x: V::Word) -> V::Word {
    big_sigma(x, V::BSIG0)
}

/// Σ1 of the variant
#[inline(always)]
pub fn bsig1<V: Variant>(x: V::Word) -> V::Word {
    big_sigma(x, V::BSIG1)
}

/// Running hash value H(i) of one message.
///
/// Starts at H(0) and absorbs one block per [`State::compress_block`].
/// Owned by a single computation; never shared.
pub struct State<V: Variant> {
    h: [V::Word; 8],
    schedule: Schedule<V>,
}

impl<V: Variant> Default for State<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> State<V> {
    /// State initialised to H(0)
    pub fn new() -> Self {
        Self::from_words(V::H0)
    }

    /// State initialised to an arbitrary intermediate hash value
    pub fn from_words(h: [V::Word; 8]) -> Self {
        Self {
            h,
            schedule: Schedule::new(),
        }
    }

    /// Current hash value
    pub fn words(&self) -> &[V::Word; 8] {
        &self.h
    }

    /// Absorb one padded block: extract, expand, compress.
    ///
    /// # Panics
    /// If `block.len() != V::BLOCK_LEN`.
    pub fn compress_block(&mut self, block: &[u8]) {
        let mut m = extract_words::<V::Word>(block);
        self.schedule.expand(&m);
        m.zeroize();

        compress::<V>(&mut self.h, self.schedule.words());
    }

    /// Consume the state and return H(N)
    pub fn into_words(self) -> [V::Word; 8] {
        self.h
    }
}

/// Run `ROUNDS` rounds over `schedule` and add the result into `h`.
///
/// For t = 0..ROUNDS:
///   T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
///   T2 = Σ0(a) + Maj(a,b,c)
///   h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
///
/// then H(i) = H(i-1) + (a,b,c,d,e,f,g,h), word by word.
pub fn compress<V: Variant>(h: &mut [V::Word; 8], schedule: &[V::Word]) {
    assert_eq!(schedule.len(), V::ROUNDS, "schedule has wrong length");

    // Working variables a..h
    let mut wv = *h;

    for (&k, &w) in V::K.iter().zip(schedule) {
        let t1 = wv[7]
            .wrapping_add(bsig1::<V>(wv[4]))
            .wrapping_add(ch(wv[4], wv[5], wv[6]))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = bsig0::<V>(wv[0]).wrapping_add(maj(wv[0], wv[1], wv[2]));

        wv.rotate_right(1);
        wv[4] = wv[4].wrapping_add(t1);
        wv[0] = t1.wrapping_add(t2);
    }

    for (hi, vi) in h.iter_mut().zip(wv.iter()) {
        *hi = hi.wrapping_add(*vi);
    }

    wv.zeroize();
}
