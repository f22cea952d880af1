// Copyright 2026 the Radial Dots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text to bit conversion.

use alloc::vec::Vec;

/// Expands ASCII `text` into 8 bits per byte, least significant bit first.
///
/// Returns `None` if `text` contains any non-ASCII character.
#[must_use]
pub fn text_to_bits(text: &str) -> Option<Vec<bool>> {
    if !text.is_ascii() {
        return None;
    }
    let mut bits = Vec::with_capacity(text.len() * 8);
    for byte in text.bytes() {
        for i in 0..8 {
            bits.push(byte & (1 << i) != 0);
        }
    }
    Some(bits)
}
