// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

//! SipHash-2-4 absorption engine over byte-array words.
//!
//! State words are big-endian arrays, so each message block is filled from
//! index 7 down to index 0 as bytes arrive. A block filled that way is
//! already the big-endian image of the little-endian 64-bit word the
//! algorithm absorbs, and no shuffling is needed at the block boundary.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::consts::{BLOCK_LEN, KEY_LEN, TAG_LEN};
use crate::word::Word64;

// Initialization constants, the ASCII of "somepseudorandomlygeneratedbytes"
const V0_INIT: [u8; BLOCK_LEN] = *b"somepseu";
const V1_INIT: [u8; BLOCK_LEN] = *b"dorandom";
const V2_INIT: [u8; BLOCK_LEN] = *b"lygenera";
const V3_INIT: [u8; BLOCK_LEN] = *b"tedbytes";

/// Rounds per absorbed block (the "2" in SipHash-2-4)
const C_ROUNDS: usize = 2;

/// Finalization rounds (the "4" in SipHash-2-4)
const D_ROUNDS: usize = 4;

/// SipHash-2-4 streaming state.
///
/// Protocol: [`SipState::new`], any number of [`SipState::absorb`] calls,
/// then [`SipState::finalize_into`] exactly once. The whole state is
/// zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SipState {
    v0: Word64,
    v1: Word64,
    v2: Word64,
    v3: Word64,
    block: [u8; BLOCK_LEN],
    fill: usize,
    length: u8,
}

impl SipState {
    /// Initialize the state from a 16-byte key.
    ///
    /// Key halves are little-endian on the wire, so each half is
    /// byte-reversed on load before being folded into the state constants.
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        let mut half = Zeroizing::new([0u8; BLOCK_LEN]);

        half.copy_from_slice(&key[..BLOCK_LEN]);
        let mut k0 = Word64::new(*half);
        k0.reverse_bytes();

        half.copy_from_slice(&key[BLOCK_LEN..]);
        let mut k1 = Word64::new(*half);
        k1.reverse_bytes();

        let mut v0 = Word64::new(V0_INIT);
        let mut v1 = Word64::new(V1_INIT);
        let mut v2 = Word64::new(V2_INIT);
        let mut v3 = Word64::new(V3_INIT);

        v0.xor_assign(&k0);
        v1.xor_assign(&k1);
        v2.xor_assign(&k0);
        v3.xor_assign(&k1);

        Self {
            v0,
            v1,
            v2,
            v3,
            block: [0u8; BLOCK_LEN],
            fill: 0,
            length: 0,
        }
    }

    /// Absorb message bytes
    pub fn absorb(&mut self, data: &[u8]) {
        for &byte in data {
            self.absorb_byte(byte);
        }
    }

    /// Absorb a single byte into the in-flight block.
    ///
    /// Bytes fill the block from index 7 downward; the eighth byte completes
    /// the block and triggers compression. The running length counter wraps
    /// modulo 256, which is all the padding step ever encodes.
    pub fn absorb_byte(&mut self, byte: u8) {
        self.length = self.length.wrapping_add(1);
        self.block[BLOCK_LEN - 1 - self.fill] = byte;
        self.fill += 1;

        if self.fill == BLOCK_LEN {
            self.compress();
            self.fill = 0;
        }
    }

    /// Pad, inject the length byte, finalize and emit the tag.
    ///
    /// The tag is written in the internal big-endian word order; callers
    /// wanting the published little-endian convention reverse it.
    pub fn finalize_into(mut self, tag: &mut [u8; TAG_LEN]) {
        // The length byte encodes the message length only, so it is latched
        // before the zero padding runs through the same absorption path.
        let length = self.length;

        while self.fill < BLOCK_LEN - 1 {
            self.absorb_byte(0);
        }
        self.absorb_byte(length);

        self.v2.xor_low_byte(0xff);
        for _ in 0..D_ROUNDS {
            self.round();
        }

        self.v0.xor_assign(&self.v1);
        self.v0.xor_assign(&self.v2);
        self.v0.xor_assign(&self.v3);

        tag.copy_from_slice(self.v0.as_bytes());
    }

    /// Mix the completed block into the state
    fn compress(&mut self) {
        let m = Word64::new(self.block);

        self.v3.xor_assign(&m);
        for _ in 0..C_ROUNDS {
            self.round();
        }
        self.v0.xor_assign(&m);
    }

    /// One ARX permutation round
    fn round(&mut self) {
        self.v0.wrapping_add_assign(&self.v1);
        self.v2.wrapping_add_assign(&self.v3);
        self.v1.rotate_left_13();
        self.v3.rotate_left_16();
        self.v1.xor_assign(&self.v0);
        self.v3.xor_assign(&self.v2);
        self.v0.rotate_left_32();
        self.v2.wrapping_add_assign(&self.v1);
        self.v0.wrapping_add_assign(&self.v3);
        self.v1.rotate_left_17();
        self.v3.rotate_left_21();
        self.v1.xor_assign(&self.v2);
        self.v3.xor_assign(&self.v0);
        self.v2.rotate_left_32();
    }

    /// State words as native values, for assertions only
    #[cfg(test)]
    pub(crate) fn words(&self) -> [u64; 4] {
        [
            self.v0.to_u64(),
            self.v1.to_u64(),
            self.v2.to_u64(),
            self.v3.to_u64(),
        ]
    }
}
