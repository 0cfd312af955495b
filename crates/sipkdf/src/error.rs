// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// KDF error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Requested derived key length exceeds the maximum (1023 bytes)
    #[error("requested derived key length exceeds maximum (1023 bytes)")]
    InvalidLength,

    /// Info does not fit the fixed stack scratch buffer (32 bytes)
    #[error("info exceeds stack scratch capacity (32 bytes)")]
    InvalidInfo,

    /// Heap scratch buffer allocation failed
    #[error("scratch buffer allocation failed")]
    OutOfMemory,
}
