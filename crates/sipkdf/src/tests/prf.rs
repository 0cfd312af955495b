// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use sipkdf_vectors::{HELLO_KEY, HELLO_MESSAGE, HELLO_TAG_BE, HELLO_TAG_LE, TAGS_LE, TEST_KEY};

use crate::prf::{TagOrder, prf, prf_with_order};

/// Independent SipHash-2-4 over native u64 arithmetic, straight from the
/// paper. Everything the byte-array version does must agree with this.
fn reference_siphash24(key: &[u8; 16], message: &[u8]) -> [u8; 8] {
    fn round(v: &mut [u64; 4]) {
        v[0] = v[0].wrapping_add(v[1]);
        v[1] = v[1].rotate_left(13);
        v[1] ^= v[0];
        v[0] = v[0].rotate_left(32);
        v[2] = v[2].wrapping_add(v[3]);
        v[3] = v[3].rotate_left(16);
        v[3] ^= v[2];
        v[0] = v[0].wrapping_add(v[3]);
        v[3] = v[3].rotate_left(21);
        v[3] ^= v[0];
        v[2] = v[2].wrapping_add(v[1]);
        v[1] = v[1].rotate_left(17);
        v[1] ^= v[2];
        v[2] = v[2].rotate_left(32);
    }

    fn compress(v: &mut [u64; 4], m: u64) {
        v[3] ^= m;
        round(v);
        round(v);
        v[0] ^= m;
    }

    let k0 = u64::from_le_bytes(key[..8].try_into().unwrap());
    let k1 = u64::from_le_bytes(key[8..].try_into().unwrap());

    let mut v = [
        0x736f6d6570736575 ^ k0,
        0x646f72616e646f6d ^ k1,
        0x6c7967656e657261 ^ k0,
        0x7465646279746573 ^ k1,
    ];

    let blocks = message.len() / 8;
    for i in 0..blocks {
        let word = message[i * 8..i * 8 + 8].try_into().unwrap();
        compress(&mut v, u64::from_le_bytes(word));
    }

    let mut last = [0u8; 8];
    let tail = &message[blocks * 8..];
    last[..tail.len()].copy_from_slice(tail);
    last[7] = message.len() as u8;
    compress(&mut v, u64::from_le_bytes(last));

    v[2] ^= 0xff;
    for _ in 0..4 {
        round(&mut v);
    }

    (v[0] ^ v[1] ^ v[2] ^ v[3]).to_le_bytes()
}

#[test]
fn empty_message_matches_the_reference_vector() {
    let mut tag = [0u8; 8];
    prf(&TEST_KEY, b"", &mut tag);
    assert_eq!(tag, TAGS_LE[0]);
}

#[test]
fn hello_world_golden_in_both_orders() {
    let mut tag = [0u8; 8];
    prf(&HELLO_KEY, HELLO_MESSAGE, &mut tag);
    assert_eq!(tag, HELLO_TAG_LE);

    let mut raw = [0u8; 8];
    prf_with_order(&HELLO_KEY, HELLO_MESSAGE, &mut raw, TagOrder::BigEndian);
    assert_eq!(raw, HELLO_TAG_BE);
}

#[test]
fn length_counter_wraps_modulo_256() {
    // Only the low 8 bits of the length go into the final block, so
    // messages past 255 bytes still produce well-defined tags.
    let message: Vec<u8> = (0..300).map(|i| i as u8).collect();

    let cases: [(usize, [u8; 8]); 3] = [
        (255, [0x1a, 0xb2, 0x4d, 0xc7, 0xfe, 0x69, 0xc1, 0xa9]),
        (256, [0xd7, 0xbf, 0xa7, 0xd2, 0x26, 0x05, 0x9d, 0x99]),
        (300, [0x39, 0x78, 0x11, 0xb6, 0x0d, 0x71, 0x0b, 0x4b]),
    ];

    for (len, expected) in cases {
        let mut tag = [0u8; 8];
        prf(&TEST_KEY, &message[..len], &mut tag);
        assert_eq!(tag, expected, "mismatch at message length {len}");

        assert_eq!(reference_siphash24(&TEST_KEY, &message[..len]), expected);
    }
}

#[test]
fn default_order_is_little_endian() {
    let mut tag = [0u8; 8];
    prf(&TEST_KEY, b"order check", &mut tag);

    let mut le = [0u8; 8];
    prf_with_order(&TEST_KEY, b"order check", &mut le, TagOrder::LittleEndian);
    assert_eq!(tag, le);

    assert_eq!(TagOrder::default(), TagOrder::LittleEndian);
}

#[test]
fn orders_are_byte_reverses_of_each_other() {
    let mut le = [0u8; 8];
    let mut be = [0u8; 8];
    prf_with_order(&TEST_KEY, b"order check", &mut le, TagOrder::LittleEndian);
    prf_with_order(&TEST_KEY, b"order check", &mut be, TagOrder::BigEndian);

    be.reverse();
    assert_eq!(le, be);
}

proptest! {
    #[test]
    fn matches_the_native_reference(
        key in any::<[u8; 16]>(),
        message in proptest::collection::vec(any::<u8>(), 0..80),
    ) {
        let mut tag = [0u8; 8];
        prf(&key, &message, &mut tag);
        prop_assert_eq!(tag, reference_siphash24(&key, &message));
    }

    #[test]
    fn big_endian_order_reverses_the_reference(
        key in any::<[u8; 16]>(),
        message in proptest::collection::vec(any::<u8>(), 0..40),
    ) {
        let mut tag = [0u8; 8];
        prf_with_order(&key, &message, &mut tag, TagOrder::BigEndian);

        let mut expected = reference_siphash24(&key, &message);
        expected.reverse();
        prop_assert_eq!(tag, expected);
    }
}
