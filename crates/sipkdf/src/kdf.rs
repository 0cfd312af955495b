// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

//! Counter-mode KDF over the SipHash-2-4 PRF.
//!
//! KDF1-style construction: block `i` is the PRF of `counter || info` where
//! the counter field is 4 bytes big-endian. Only the low counter byte is
//! ever non-zero, which caps the derived key at 1023 bytes and keeps the
//! counter single-byte on every target.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::consts::{COUNTER_LEN, INFO_CAPACITY, KEY_LEN, MAX_DERIVED_KEY_LEN, TAG_LEN};
use crate::error::KdfError;
use crate::prf::prf;

/// Scratch buffer policy for the KDF message `counter || info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScratchPolicy {
    /// Fixed stack buffer, no allocation; info is limited to 32 bytes
    #[default]
    Stack,

    /// Heap buffer sized to the info; allocation failure is reported
    Heap,
}

/// Derive `derived_key.len()` bytes from a 16-byte secret.
///
/// The secret is used directly as the PRF key. Block `i` of the output is
/// the PRF tag of the message `00 00 00 i || info`, with the final block
/// truncated to the requested length. Uses the stack scratch policy; see
/// [`kdf_with`] for the heap variant.
///
/// On error nothing is written to `derived_key`.
///
/// # Errors
///
/// - [`KdfError::InvalidLength`] if more than 1023 bytes are requested
/// - [`KdfError::InvalidInfo`] if `info` exceeds 32 bytes
///
/// # Example
///
/// ```
/// use sipkdf::kdf;
///
/// let secret = *b"0123456789abcdef";
/// let mut derived = [0u8; 40];
///
/// kdf(&secret, b"session v1", &mut derived)?;
/// # Ok::<(), sipkdf::KdfError>(())
/// ```
pub fn kdf(secret: &[u8; KEY_LEN], info: &[u8], derived_key: &mut [u8]) -> Result<(), KdfError> {
    kdf_with(secret, info, derived_key, ScratchPolicy::Stack)
}

/// Derive `derived_key.len()` bytes with an explicit scratch policy.
///
/// # Errors
///
/// - [`KdfError::InvalidLength`] if more than 1023 bytes are requested
/// - [`KdfError::InvalidInfo`] if `info` exceeds 32 bytes (stack policy)
/// - [`KdfError::OutOfMemory`] if scratch allocation fails (heap policy)
pub fn kdf_with(
    secret: &[u8; KEY_LEN],
    info: &[u8],
    derived_key: &mut [u8],
    policy: ScratchPolicy,
) -> Result<(), KdfError> {
    if derived_key.len() > MAX_DERIVED_KEY_LEN {
        return Err(KdfError::InvalidLength);
    }

    match policy {
        ScratchPolicy::Stack => {
            if info.len() > INFO_CAPACITY {
                return Err(KdfError::InvalidInfo);
            }

            let mut message = Zeroizing::new([0u8; COUNTER_LEN + INFO_CAPACITY]);
            message[COUNTER_LEN..COUNTER_LEN + info.len()].copy_from_slice(info);

            expand(secret, &mut message[..COUNTER_LEN + info.len()], derived_key);
        }
        ScratchPolicy::Heap => {
            let mut scratch: Vec<u8> = Vec::new();
            scratch
                .try_reserve_exact(COUNTER_LEN + info.len())
                .map_err(|_| KdfError::OutOfMemory)?;

            let mut message = Zeroizing::new(scratch);
            message.resize(COUNTER_LEN + info.len(), 0);
            message[COUNTER_LEN..].copy_from_slice(info);

            expand(secret, &mut message, derived_key);
        }
    }

    Ok(())
}

/// Counter-mode expansion over a prepared `counter || info` message.
///
/// The counter field of `message` must be zero on entry; only its low byte
/// is ever written.
fn expand(secret: &[u8; KEY_LEN], message: &mut [u8], derived_key: &mut [u8]) {
    if derived_key.is_empty() {
        return;
    }

    let mut tag = Zeroizing::new([0u8; TAG_LEN]);
    let blocks = derived_key.len().div_ceil(TAG_LEN);
    let mut offset = 0;

    for counter in 0..blocks {
        message[COUNTER_LEN - 1] = counter as u8;
        prf(secret, message, &mut tag);

        let copy_len = core::cmp::min(TAG_LEN, derived_key.len() - offset);
        derived_key[offset..offset + copy_len].copy_from_slice(&tag[..copy_len]);
        offset += copy_len;
    }
}
