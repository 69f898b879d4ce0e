// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1
//!
//! The padded message is `M || 1 || 0^k || len(M)` where `len(M)` occupies
//! the last 64 bits (SHA-256) or 128 bits (SHA-512) of the final block.
//!
//! Padding is an explicit three-state machine so each transition can be
//! driven without any I/O:
//!
//! ```text
//!            full block
//!           ┌──────────┐
//!           ▼          │
//!       ┌─────────┐────┘    short, room for length    ┌──────┐
//!  ───► │ Reading │ ─────────────────────────────────► │ Done │
//!       └─────────┘                                    └──────┘
//!            │ short, no room for length                   ▲
//!            ▼                                             │
//!       ┌────────────┐        length-only block            │
//!       │ PadPending │ ────────────────────────────────────┘
//!       └────────────┘
//! ```

use core::marker::PhantomData;

use crate::word::Word;

/// The `1` bit followed by seven `0` bits
const MARKER: u8 = 0x80;

/// Padding progress of one hash computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadState {
    /// Message bytes are still being consumed
    Reading,
    /// The marker has been emitted; a length-only block is still owed
    PadPending,
    /// The final block has been emitted
    Done,
}

/// Padding state machine for one message.
///
/// Tracks the message length in bits and decides, for each block handed to
/// it, how much padding that block receives. Every method operates on a
/// block buffer of exactly `W::BLOCK_LEN` bytes.
#[derive(Debug, Clone)]
pub struct Padder<W: Word> {
    state: PadState,
    bit_len: u128,
    _word: PhantomData<W>,
}

impl<W: Word> Default for Padder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Padder<W> {
    /// Create a padder in the `Reading` state with a zero length counter
    pub const fn new() -> Self {
        Self {
            state: PadState::Reading,
            bit_len: 0,
            _word: PhantomData,
        }
    }

    /// Current state
    pub fn state(&self) -> PadState {
        self.state
    }

    /// Bits of original message consumed so far
    pub fn bit_len(&self) -> u128 {
        self.bit_len
    }

    /// Offset of the length field inside a block
    const fn length_offset() -> usize {
        W::BLOCK_LEN - W::LENGTH_FIELD_LEN
    }

    /// Account for `filled` message bytes at the front of `block`.
    ///
    /// `filled == BLOCK_LEN` leaves the block untouched. A shorter fill marks
    /// end of message: the marker is appended and, if the length field still
    /// fits, written too (`Done`); otherwise the block is zero-filled to its
    /// end and a length-only block is owed (`PadPending`). A fill of `0` is
    /// the empty final read and is padded like any other short block.
    ///
    /// # Panics
    /// If called outside `Reading`, if `block` is not one block long, or if
    /// `filled` exceeds the block length.
    pub fn absorb(&mut self, block: &mut [u8], filled: usize) {
        assert_eq!(self.state, PadState::Reading, "absorb outside Reading");
        assert_eq!(block.len(), W::BLOCK_LEN, "block has wrong length");
        assert!(filled <= W::BLOCK_LEN, "fill exceeds block length");

        self.bit_len = self.bit_len.wrapping_add((filled as u128) << 3);

        if filled == W::BLOCK_LEN {
            return;
        }

        block[filled] = MARKER;

        if filled < Self::length_offset() {
            block[filled + 1..Self::length_offset()].fill(0);
            self.write_length(block);
            self.state = PadState::Done;
        } else {
            block[filled + 1..].fill(0);
            self.state = PadState::PadPending;
        }
    }

    /// Emit the length-only block owed after a `PadPending` transition.
    ///
    /// # Panics
    /// If called outside `PadPending` or if `block` is not one block long.
    pub fn finish(&mut self, block: &mut [u8]) {
        assert_eq!(self.state, PadState::PadPending, "finish outside PadPending");
        assert_eq!(block.len(), W::BLOCK_LEN, "block has wrong length");

        block[..Self::length_offset()].fill(0);
        self.write_length(block);
        self.state = PadState::Done;
    }

    /// Big-endian bit length into the trailing `LENGTH_FIELD_LEN` bytes
    fn write_length(&self, block: &mut [u8]) {
        let be = self.bit_len.to_be_bytes();
        block[Self::length_offset()..].copy_from_slice(&be[be.len() - W::LENGTH_FIELD_LEN..]);
    }
}
