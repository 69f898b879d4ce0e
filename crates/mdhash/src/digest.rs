// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Final hash value H(N)

use alloc::vec::Vec;
use core::fmt;

use crate::word::Word;

/// Message digest: exactly 8 words.
///
/// Rendered as hex with every word zero-padded to `BITS / 4` digits and no
/// separators. `Display` and `{:x}` are lowercase, `{:X}` is uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest<W: Word> {
    words: [W; 8],
}

impl<W: Word> Digest<W> {
    /// Wrap a final hash value
    pub const fn new(words: [W; 8]) -> Self {
        Self { words }
    }

    /// H(N)_0 .. H(N)_7
    pub fn words(&self) -> &[W; 8] {
        &self.words
    }

    /// Digest size in bytes
    pub const fn len(&self) -> usize {
        8 * W::BYTES
    }

    /// Always false; a digest is never empty
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Write the big-endian byte encoding into `out`.
    ///
    /// # Panics
    /// If `out.len() != self.len()`.
    pub fn write_bytes(&self, out: &mut [u8]) {
        assert_eq!(out.len(), self.len(), "output has wrong length");

        for (word, chunk) in self.words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
            word.write_be_slice(chunk);
        }
    }

    /// Big-endian byte encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = alloc::vec![0u8; self.len()];
        self.write_bytes(&mut out);
        out
    }
}

impl<W: Word> fmt::LowerHex for Digest<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (W::BITS / 4) as usize;
        for word in &self.words {
            write!(f, "{:0width$x}", word, width = width)?;
        }
        Ok(())
    }
}

impl<W: Word> fmt::UpperHex for Digest<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (W::BITS / 4) as usize;
        for word in &self.words {
            write!(f, "{:0width$X}", word, width = width)?;
        }
        Ok(())
    }
}

impl<W: Word> fmt::Display for Digest<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
