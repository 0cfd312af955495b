// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

/// PRF key and KDF secret size in bytes
pub const KEY_LEN: usize = 16;

/// PRF output size in bytes
pub const TAG_LEN: usize = 8;

/// Message block size in bytes
pub(crate) const BLOCK_LEN: usize = 8;

/// Counter field size at the head of each KDF message
pub(crate) const COUNTER_LEN: usize = 4;

/// Info capacity of the KDF stack scratch buffer in bytes
pub const INFO_CAPACITY: usize = 32;

/// Maximum derived key length: 128 blocks of 8 bytes minus one,
/// so the block counter always fits a single byte
pub const MAX_DERIVED_KEY_LEN: usize = 1023;
