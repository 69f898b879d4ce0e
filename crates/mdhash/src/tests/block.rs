// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::block::extract_words;

#[test]
fn test_extract_words_sha256_block() {
    let block: Vec<u8> = (0..64u8).collect();
    let words = extract_words::<u32>(&block);

    assert_eq!(words[0], 0x0001_0203);
    assert_eq!(words[1], 0x0405_0607);
    assert_eq!(words[15], 0x3c3d_3e3f);
}

#[test]
fn test_extract_words_sha512_block() {
    let block: Vec<u8> = (0..128u8).collect();
    let words = extract_words::<u64>(&block);

    assert_eq!(words[0], 0x0001_0203_0405_0607);
    assert_eq!(words[15], 0x7879_7a7b_7c7d_7e7f);
}

#[test]
fn test_extract_words_padded_abc() {
    // FIPS 180-4 SHA-256 example: M(1) for "abc"
    let mut block = [0u8; 64];
    block[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
    block[63] = 0x18;

    let words = extract_words::<u32>(&block);

    assert_eq!(words[0], 0x6162_6380);
    assert!(words[1..15].iter().all(|w| *w == 0));
    assert_eq!(words[15], 0x0000_0018);
}

#[test]
#[should_panic(expected = "block has wrong length")]
fn test_extract_words_rejects_short_block() {
    extract_words::<u32>(&[0u8; 63]);
}
