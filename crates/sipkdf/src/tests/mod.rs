// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

mod prf;
