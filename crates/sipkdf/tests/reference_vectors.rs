// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

//! Published SipHash-2-4 vectors and derived-key goldens, driven through
//! the public API.

use sipkdf::{TAG_LEN, TagOrder, kdf, prf, prf_with_order};
use sipkdf_vectors::{
    HELLO_KEY, HELLO_MESSAGE, HELLO_TAG_BE, HELLO_TAG_LE, KDF_DERIVED_20,
    KDF_DERIVED_EMPTY_INFO_16, KDF_INFO, TAGS_LE, TEST_KEY, fill_message,
};

#[test]
fn all_published_message_lengths() {
    let mut message = [0u8; 64];
    fill_message(&mut message);

    for (len, expected) in TAGS_LE.iter().enumerate() {
        let mut tag = [0u8; TAG_LEN];
        prf(&TEST_KEY, &message[..len], &mut tag);
        assert_eq!(&tag, expected, "vector mismatch at message length {len}");
    }
}

#[test]
fn big_endian_order_reverses_the_published_vectors() {
    let mut message = [0u8; 64];
    fill_message(&mut message);

    for (len, expected) in TAGS_LE.iter().enumerate() {
        let mut tag = [0u8; TAG_LEN];
        prf_with_order(&TEST_KEY, &message[..len], &mut tag, TagOrder::BigEndian);
        tag.reverse();
        assert_eq!(&tag, expected, "vector mismatch at message length {len}");
    }
}

#[test]
fn hello_world_tags() {
    let mut tag = [0u8; TAG_LEN];
    prf(&HELLO_KEY, HELLO_MESSAGE, &mut tag);
    assert_eq!(tag, HELLO_TAG_LE);

    prf_with_order(&HELLO_KEY, HELLO_MESSAGE, &mut tag, TagOrder::BigEndian);
    assert_eq!(tag, HELLO_TAG_BE);
}

#[test]
fn derived_key_goldens() {
    let mut derived = [0u8; 20];
    kdf(&TEST_KEY, KDF_INFO, &mut derived).unwrap();
    assert_eq!(derived, KDF_DERIVED_20);

    let mut derived = [0u8; 16];
    kdf(&TEST_KEY, b"", &mut derived).unwrap();
    assert_eq!(derived, KDF_DERIVED_EMPTY_INFO_16);
}
