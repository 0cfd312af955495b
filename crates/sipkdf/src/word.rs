// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

//! Word64 - 64-bit word emulated over an 8-byte array.
//!
//! Bytes are stored most-significant first. Addition carries through a
//! 16-bit accumulator; the non-byte-aligned rotations (13, 17, 21) are
//! composed from the two-byte rotation and a 1..=7 bit rotation, so no
//! operation ever needs more than 8-bit arithmetic.
//! All operations are in-place.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// 64-bit word as 8 bytes, most-significant byte first.
///
/// - `#[repr(transparent)]` ensures same layout as `[u8; 8]`
/// - All operations are `_assign`-style in-place mutations
/// - Zeroized on drop
#[derive(Zeroize, ZeroizeOnDrop)]
#[repr(transparent)]
pub struct Word64([u8; 8]);

impl Word64 {
    /// Create new Word64 from big-endian bytes
    #[inline(always)]
    pub const fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Borrow the big-endian bytes
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Arithmetic operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self += rhs (wrapping), least-significant byte first with a 16-bit carry
    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word64) {
        let mut carry = 0u16;

        for i in (0..8).rev() {
            let sum = u16::from(self.0[i]) + u16::from(rhs.0[i]) + carry;
            self.0[i] = sum as u8;
            carry = sum >> 8;
        }
        // Carry out of the top byte is discarded: the sum wraps modulo 2^64.
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Bitwise operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self ^= rhs
    #[inline(always)]
    pub fn xor_assign(&mut self, rhs: &Word64) {
        for i in 0..8 {
            self.0[i] ^= rhs.0[i];
        }
    }

    /// XOR a value into the least-significant byte
    #[inline(always)]
    pub fn xor_low_byte(&mut self, value: u8) {
        self.0[7] ^= value;
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Rotations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self = self.rotate_left(16): a pure two-byte permutation
    #[inline(always)]
    pub fn rotate_left_16(&mut self) {
        self.0.rotate_left(2);
    }

    /// self = self.rotate_left(32): swap the two 4-byte halves
    #[inline(always)]
    pub fn rotate_left_32(&mut self) {
        self.0.rotate_left(4);
    }

    /// self = self.rotate_left(13), composed as left 16 then right 3
    #[inline(always)]
    pub fn rotate_left_13(&mut self) {
        self.rotate_left_16();
        self.rotate_right_bits(3);
    }

    /// self = self.rotate_left(17), composed as left 16 then left 1
    #[inline(always)]
    pub fn rotate_left_17(&mut self) {
        self.rotate_left_16();
        self.rotate_left_bits(1);
    }

    /// self = self.rotate_left(21), composed as left 16 then left 5
    #[inline(always)]
    pub fn rotate_left_21(&mut self) {
        self.rotate_left_16();
        self.rotate_left_bits(5);
    }

    /// self = self.rotate_left(n) for 1 <= n <= 7.
    ///
    /// Each byte takes the bits its right neighbor shifts out; byte 7 takes
    /// the bits spilled off the top of byte 0.
    #[inline(always)]
    pub fn rotate_left_bits(&mut self, n: u32) {
        debug_assert!((1..8).contains(&n));

        let spill = self.0[0] >> (8 - n);

        for i in 0..7 {
            self.0[i] = (self.0[i] << n) | (self.0[i + 1] >> (8 - n));
        }
        self.0[7] = (self.0[7] << n) | spill;
    }

    /// self = self.rotate_right(n) for 1 <= n <= 7.
    #[inline(always)]
    pub fn rotate_right_bits(&mut self, n: u32) {
        debug_assert!((1..8).contains(&n));

        let spill = self.0[7] << (8 - n);

        for i in (1..8).rev() {
            self.0[i] = (self.0[i] >> n) | (self.0[i - 1] << (8 - n));
        }
        self.0[0] = (self.0[0] >> n) | spill;
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Byte order
    // ═══════════════════════════════════════════════════════════════════════════

    /// Reverse all 8 bytes, translating between the little-endian wire form
    /// and the internal big-endian form
    #[inline(always)]
    pub fn reverse_bytes(&mut self) {
        self.0.reverse();
    }

    /// Native value, for assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// Build from a native value, for assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }
}
