// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::compress::{State, bsig0, bsig1, ch, compress, maj};
use crate::consts::{H0_256, H0_512};
use crate::hash::{sha256, sha512};
use crate::reader::pad_message;
use crate::schedule::Schedule;
use crate::variant::{Sha256, Sha512};

const TEST_VALUES: [u64; 5] = [
    0x0000_0000_0000_0000,
    0xFFFF_FFFF_FFFF_FFFF,
    0x0123_4567_89AB_CDEF,
    0xFEDC_BA98_7654_3210,
    0x0F0F_0F0F_F0F0_F0F0,
];

#[test]
fn ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                assert_eq!(
                    ch(x, y, z),
                    (x & y) ^ (!x & z),
                    "Ch mismatch for x={x:#018x}, y={y:#018x}, z={z:#018x}"
                );
                let (x, y, z) = (x as u32, y as u32, z as u32);
                assert_eq!(ch(x, y, z), (x & y) ^ (!x & z));
            }
        }
    }
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                assert_eq!(
                    maj(x, y, z),
                    (x & y) ^ (x & z) ^ (y & z),
                    "Maj mismatch for x={x:#018x}, y={y:#018x}, z={z:#018x}"
                );
            }
        }
    }
}

#[test]
fn bsig_matches_reference() {
    for &x in &TEST_VALUES {
        assert_eq!(
            bsig0::<Sha512>(x),
            x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
        );
        assert_eq!(
            bsig1::<Sha512>(x),
            x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
        );

        let x = x as u32;
        assert_eq!(
            bsig0::<Sha256>(x),
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
        );
        assert_eq!(
            bsig1::<Sha256>(x),
            x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
        );
    }
}

#[test]
fn test_state_starts_at_h0() {
    assert_eq!(State::<Sha256>::new().words(), &H0_256);
    assert_eq!(State::<Sha512>::new().words(), &H0_512);
}

#[test]
fn test_single_block_abc() {
    // FIPS 180-4 SHA-256 example: one block, H(1) is the digest
    let padded = pad_message::<Sha256>(b"abc");
    assert_eq!(padded.len(), 64);

    let mut state = State::<Sha256>::new();
    state.compress_block(&padded);

    assert_eq!(
        state.words(),
        &[
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    );
}

#[test]
fn test_state_chains_across_blocks() {
    let msg = [0x5au8; 200];
    let padded = pad_message::<Sha512>(&msg);
    assert_eq!(padded.len(), 256);

    let mut state = State::<Sha512>::new();
    for block in padded.chunks_exact(128) {
        state.compress_block(block);
    }

    assert_eq!(&state.into_words(), sha512(&msg).words());
}

#[test]
fn test_compress_adds_into_running_digest() {
    // Compressing from an intermediate value must differ from H(0)
    let padded = pad_message::<Sha256>(b"abc");
    let m = crate::block::extract_words::<u32>(&padded);
    let mut schedule = Schedule::<Sha256>::new();
    schedule.expand(&m);

    let mut h = H0_256;
    compress::<Sha256>(&mut h, schedule.words());
    assert_eq!(&h, sha256(b"abc").words());

    let mut resumed = State::<Sha256>::from_words(h);
    resumed.compress_block(&padded);
    assert_ne!(resumed.words(), &h);
}

#[test]
#[should_panic(expected = "schedule has wrong length")]
fn test_compress_rejects_short_schedule() {
    let mut h = H0_256;
    compress::<Sha256>(&mut h, &[0u32; 16]);
}
