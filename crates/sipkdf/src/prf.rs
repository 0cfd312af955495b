// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

use crate::consts::{KEY_LEN, TAG_LEN};
use crate::siphash::SipState;

/// Byte order of the 8-byte tag handed to the caller.
///
/// The engine keeps state words as big-endian arrays. The published
/// SipHash-2-4 vectors encode the final word little-endian, so that is the
/// default; [`TagOrder::BigEndian`] emits the word as it sits in the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagOrder {
    /// Published reference-vector order
    #[default]
    LittleEndian,

    /// Raw internal state order
    BigEndian,
}

/// SipHash-2-4 keyed tag over `message`, in the default little-endian order.
///
/// Deterministic: identical key and message always produce an identical tag.
/// The key must be exactly 16 bytes; the type makes shorter or longer keys
/// unrepresentable rather than a runtime error.
///
/// # Example
///
/// ```
/// use sipkdf::prf;
///
/// let key = *b"sixteen byte key";
/// let mut tag = [0u8; 8];
///
/// prf(&key, b"a message", &mut tag);
/// ```
pub fn prf(key: &[u8; KEY_LEN], message: &[u8], tag: &mut [u8; TAG_LEN]) {
    prf_with_order(key, message, tag, TagOrder::LittleEndian);
}

/// SipHash-2-4 keyed tag with an explicit output byte order.
pub fn prf_with_order(
    key: &[u8; KEY_LEN],
    message: &[u8],
    tag: &mut [u8; TAG_LEN],
    order: TagOrder,
) {
    let mut state = SipState::new(key);
    state.absorb(message);
    state.finalize_into(tag);

    if order == TagOrder::LittleEndian {
        tag.reverse();
    }
}
