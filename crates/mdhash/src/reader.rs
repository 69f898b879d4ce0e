// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block reader: pulls raw bytes from a [`ByteSource`] and hands out padded
//! blocks one at a time.
//!
//! The total message length is never needed in advance, so sources of
//! unknown length (pipes, sockets) are hashed without buffering.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::consts::MAX_BLOCK_LEN;
use crate::padding::{PadState, Padder};
use crate::source::{ByteSource, SliceSource};
use crate::variant::Variant;

/// Lazily produces the padded blocks of one message.
pub struct BlockReader<V: Variant, S: ByteSource> {
    source: S,
    padder: Padder<V::Word>,
    buffer: [u8; MAX_BLOCK_LEN],
    failed: bool,
}

impl<V: Variant, S: ByteSource> BlockReader<V, S> {
    /// Start reading `source` from its current position
    pub fn new(source: S) -> Self {
        Self {
            source,
            padder: Padder::new(),
            buffer: [0u8; MAX_BLOCK_LEN],
            failed: false,
        }
    }

    /// Padding state of the message
    pub fn state(&self) -> PadState {
        self.padder.state()
    }

    /// Bits of message consumed so far
    pub fn bit_len(&self) -> u128 {
        self.padder.bit_len()
    }

    /// Produce the next padded block, or `None` once the final block has
    /// been handed out.
    ///
    /// A source error aborts the message: the error is returned once and
    /// every later call yields `None`.
    pub fn next_block(&mut self) -> Result<Option<&[u8]>, S::Error> {
        if self.failed {
            return Ok(None);
        }

        let block = &mut self.buffer[..V::BLOCK_LEN];

        match self.padder.state() {
            PadState::Reading => {
                let filled = match fill(&mut self.source, block) {
                    Ok(filled) => filled,
                    Err(e) => {
                        self.failed = true;
                        block.zeroize();
                        return Err(e);
                    }
                };
                self.padder.absorb(block, filled);
            }
            PadState::PadPending => self.padder.finish(block),
            PadState::Done => return Ok(None),
        }

        Ok(Some(&self.buffer[..V::BLOCK_LEN]))
    }
}

impl<V: Variant, S: ByteSource> Drop for BlockReader<V, S> {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}

/// Read until `block` is full or the source is exhausted
fn fill<S: ByteSource>(source: &mut S, block: &mut [u8]) -> Result<usize, S::Error> {
    let mut filled = 0;

    while filled < block.len() {
        let n = source.read_into(&mut block[filled..])?;
        if n == 0 {
            break;
        }
        debug_assert!(n <= block.len() - filled, "source overreported read");
        filled += core::cmp::min(n, block.len() - filled);
    }

    Ok(filled)
}

/// Materialise the complete padded form of `data`.
///
/// The result is always a whole number of `V::BLOCK_LEN` blocks.
pub fn pad_message<V: Variant>(data: &[u8]) -> Vec<u8> {
    let padded_len = (data.len() / V::BLOCK_LEN + 2) * V::BLOCK_LEN;
    let mut out = Vec::with_capacity(padded_len);

    let mut reader = BlockReader::<V, _>::new(SliceSource::new(data));
    loop {
        match reader.next_block() {
            Ok(Some(block)) => out.extend_from_slice(block),
            Ok(None) => break,
            Err(never) => match never {},
        }
    }

    out
}
