// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-point helpers shared by the range decoder and the SILK layer. All
//! arithmetic here must be bit-exact per RFC 6716 section 1.1.4.

/// The minimum number of bits required to store a positive integer `n` in binary, or 0 for a
/// non-positive integer.
///
/// ```text
///           ( 0,                 n <= 0
/// ilog(n) = <
///           ( floor(log2(n))+1,  n > 0
/// ```
pub fn ilog(n: i32) -> i32 {
    if n <= 0 {
        0
    }
    else {
        32 - n.leading_zeros() as i32
    }
}

/// Multiply two Q-format values in 64-bit, then shift the product right with rounding.
pub fn mul_round(a: i32, b: i32, bits: u32) -> i32 {
    ((i64::from(a) * i64::from(b) + (1 << (bits - 1))) >> bits) as i32
}

/// Multiply two Q-format values in 64-bit, then shift the product right (truncating).
pub fn mul_shift(a: i32, b: i32, bits: u32) -> i32 {
    ((i64::from(a) * i64::from(b)) >> bits) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ilog_matches_reference_values() {
        assert_eq!(ilog(-1), 0);
        assert_eq!(ilog(0), 0);
        assert_eq!(ilog(1), 1);
        assert_eq!(ilog(2), 2);
        assert_eq!(ilog(3), 2);
        assert_eq!(ilog(4), 3);
        assert_eq!(ilog(7), 3);
    }

    #[test]
    fn mul_round_rounds_to_nearest() {
        assert_eq!(mul_round(3, 1, 1), 2);
        assert_eq!(mul_round(-32768, 65470, 16), -32735);
    }
}
