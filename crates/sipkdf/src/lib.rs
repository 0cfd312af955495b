// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

//! SipHash-2-4 PRF and counter-mode KDF built from 8-bit arithmetic
//!
//! Every 64-bit state word is an 8-byte array; addition, XOR and the
//! 13/17/21/32-bit rotations are composed from byte operations with
//! explicit carry and spill handling, so the algorithm ports by inspection
//! to targets without a native 64-bit ALU. Tags match the published
//! SipHash-2-4 reference vectors under the default byte order. All
//! intermediate key material is zeroized before the functions return.
//!
//! References:
//! - Aumasson, Bernstein: "SipHash: a fast short-input PRF"
//!   <https://eprint.iacr.org/2012/351>
//! - ISO/IEC 18033-2 Section 6.2.2 (KDF1 counter-mode construction)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod kdf;
mod prf;
mod siphash;
mod word;

pub use consts::{INFO_CAPACITY, KEY_LEN, MAX_DERIVED_KEY_LEN, TAG_LEN};
pub use error::KdfError;
pub use kdf::{ScratchPolicy, kdf, kdf_with};
pub use prf::{TagOrder, prf, prf_with_order};
