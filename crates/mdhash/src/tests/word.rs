// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::Word;

#[test]
fn test_word_sizes() {
    assert_eq!(<u32 as Word>::BYTES, 4);
    assert_eq!(<u32 as Word>::BLOCK_LEN, 64);
    assert_eq!(<u32 as Word>::LENGTH_FIELD_LEN, 8);

    assert_eq!(<u64 as Word>::BYTES, 8);
    assert_eq!(<u64 as Word>::BLOCK_LEN, 128);
    assert_eq!(<u64 as Word>::LENGTH_FIELD_LEN, 16);
}

#[test]
fn test_from_be_slice_ignores_host_order() {
    assert_eq!(u32::from_be_slice(&[0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
    assert_eq!(
        u64::from_be_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]),
        0x0123_4567_89ab_cdef
    );
}

#[test]
fn test_write_be_slice() {
    let mut out = [0u8; 4];
    0xdead_beefu32.write_be_slice(&mut out);
    assert_eq!(out, [0xde, 0xad, 0xbe, 0xef]);

    let mut out = [0u8; 8];
    0x0123_4567_89ab_cdefu64.write_be_slice(&mut out);
    assert_eq!(out, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
}

#[test]
fn test_wrapping_add_wraps() {
    assert_eq!(Word::wrapping_add(u32::MAX, 2u32), 1);
    assert_eq!(Word::wrapping_add(u64::MAX, 1u64), 0);
}

#[test]
fn test_rotr_and_shr() {
    assert_eq!(0x0000_0001u32.rotr(1), 0x8000_0000);
    assert_eq!(0x8000_0000u32.shr(31), 1);
    assert_eq!(0x1u64.rotr(4), 0x1000_0000_0000_0000);
    assert_eq!(0xf0u64.shr(4), 0x0f);
}
