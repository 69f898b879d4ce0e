// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word extraction per FIPS 180-4 Section 5.2

use crate::word::Word;

/// Number of message words in one block
pub const WORDS_PER_BLOCK: usize = 16;

/// Reinterpret a block as 16 big-endian words M(i)_0 .. M(i)_15.
///
/// The result does not depend on host byte order.
///
/// # Panics
/// If `block.len() != W::BLOCK_LEN`.
#[inline]
pub fn extract_words<W: Word>(block: &[u8]) -> [W; WORDS_PER_BLOCK] {
    assert_eq!(block.len(), W::BLOCK_LEN, "block has wrong length");

    let mut words = [W::ZERO; WORDS_PER_BLOCK];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *word = W::from_be_slice(bytes);
    }
    words
}
