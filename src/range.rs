// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The range (arithmetic) decoder.
//!
//! Opus uses an entropy coder based on range coding, a rediscovery of the FIFO
//! arithmetic code, with digits in base 256 rather than bits. All of the
//! calculations in the range coder use bit-exact 32-bit unsigned integer
//! arithmetic.
//!
//! The decoder maintains an internal state vector composed of the two-tuple
//! `(val, rng)`, where `val` represents the difference between the high end of
//! the current range and the actual coded value, minus one, and `rng`
//! represents the size of the current range.
//!
//! https://datatracker.ietf.org/doc/html/rfc6716#section-4.1

/// The minimum allowed size for `rng`: after every symbol, `rng > 2^23`.
const MIN_RANGE_SIZE: u32 = 1 << 23;

/// Range decoder over one SILK frame payload.
///
/// Symbol extraction never fails: reads past the end of the payload yield zero
/// bits, per RFC 6716 section 4.1.2.1. A corrupt payload desynchronizes the
/// symbol stream but can never push the decoder out of bounds.
pub struct Decoder<'a> {
    data: &'a [u8],
    bits_read: usize,
    /// `rng` in RFC 6716.
    range_size: u32,
    /// `val` in RFC 6716.
    high_and_coded_difference: u32,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over `data` and establish the `rng > 2^23` invariant.
    ///
    /// Let b0 be the first input byte (or zero if the frame is empty). The
    /// decoder initializes `rng` to 128 and `val` to `127 - (b0 >> 1)`, the
    /// top 7 bits of b0, saving the remaining bit for renormalization.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.1.1
    pub fn new(data: &'a [u8]) -> Self {
        let mut decoder = Decoder {
            data,
            bits_read: 0,
            range_size: 128,
            high_and_coded_difference: 0,
        };
        decoder.high_and_coded_difference = 127 - decoder.get_bits(7);
        decoder.normalize();
        decoder
    }

    /// Decode a single symbol with a table-based context of up to 8 bits.
    ///
    /// `icdf[0]` holds the total `ft`; `icdf[1..]` is the strictly increasing
    /// cumulative distribution ending at `ft`.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.1.3.3
    pub fn decode_symbol_with_icdf(&mut self, icdf: &[u32]) -> u32 {
        let total = icdf[0];
        let cdf = &icdf[1..];

        let scale = self.range_size / total;
        let symbol = total - (self.high_and_coded_difference / scale + 1).min(total);

        let mut k = 0;
        while cdf[k] <= symbol {
            k += 1;
        }

        let high = cdf[k];
        let low = if k > 0 { cdf[k - 1] } else { 0 };
        self.update(scale, low, high, total);

        k as u32
    }

    /// Decode a single binary symbol. The context is described by a single
    /// parameter, `logp`, the absolute value of the base-2 logarithm of the
    /// probability of a "1".
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.1.3.2
    pub fn decode_symbol_logp(&mut self, logp: u32) -> u32 {
        let scale = self.range_size >> logp;

        let k = if self.high_and_coded_difference >= scale {
            self.high_and_coded_difference -= scale;
            self.range_size -= scale;
            0
        }
        else {
            self.range_size = scale;
            1
        };
        self.normalize();

        k
    }

    /// While `rng <= 2^23`: shift in the next 8 bits, where the leftover bit
    /// of the previous byte becomes the high bit of the new octet, and set
    /// `val = ((val << 8) + (255 - sym)) & 0x7FFFFFFF`. Bytes past the end of
    /// the frame read as zero.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.1.2.1
    fn normalize(&mut self) {
        while self.range_size <= MIN_RANGE_SIZE {
            self.range_size <<= 8;
            self.high_and_coded_difference =
                ((self.high_and_coded_difference << 8) + (255 - self.get_bits(8))) & 0x7FFF_FFFF;
        }
    }

    fn update(&mut self, scale: u32, low: u32, high: u32, total: u32) {
        self.high_and_coded_difference -= scale * (total - high);
        if low > 0 {
            self.range_size = scale * (high - low);
        }
        else {
            self.range_size -= scale * (total - high);
        }
        self.normalize();
    }

    fn get_bit(&mut self) -> u32 {
        let index = self.bits_read / 8;
        let offset = self.bits_read % 8;

        if index >= self.data.len() {
            return 0;
        }

        self.bits_read += 1;
        u32::from((self.data[index] >> (7 - offset)) & 1)
    }

    fn get_bits(&mut self, n: usize) -> u32 {
        let mut bits = 0;
        for _ in 0..n {
            bits = (bits << 1) | self.get_bit();
        }
        bits
    }

    /// Resume decoding from a known mid-stream state. Reference test vectors
    /// are expressed against such states.
    #[cfg(test)]
    pub fn with_state(data: &'a [u8], bits_read: usize, range_size: u32, val: u32) -> Self {
        Decoder { data, bits_read, range_size, high_and_coded_difference: val }
    }

    #[cfg(test)]
    pub fn range_size(&self) -> u32 {
        self.range_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SILK_FRAME: &[u8] = &[0x0b, 0xe4, 0xc1, 0x36, 0xec, 0xc5, 0x80];

    #[test]
    fn decode_header_symbols_logp() {
        let mut decoder = Decoder::new(TEST_SILK_FRAME);

        // VAD and LBRR flags.
        assert_eq!(decoder.decode_symbol_logp(1), 0);
        assert_eq!(decoder.decode_symbol_logp(1), 0);
    }

    #[test]
    fn decode_symbol_with_icdf_frame_type_inactive() {
        let mut decoder = Decoder::new(TEST_SILK_FRAME);
        decoder.decode_symbol_logp(1);
        decoder.decode_symbol_logp(1);

        let frame_type_vad_inactive = &[256, 26, 256];
        assert_eq!(decoder.decode_symbol_with_icdf(frame_type_vad_inactive), 1);
    }

    #[test]
    fn decode_gain_symbols_in_sequence() {
        let mut decoder = Decoder::new(TEST_SILK_FRAME);
        decoder.decode_symbol_logp(1);
        decoder.decode_symbol_logp(1);

        let frame_type_vad_inactive = &[256, 26, 256];
        let gain_msb_inactive = &[256, 32, 144, 212, 241, 253, 254, 255, 256];
        let gain_lsb = &[256, 32, 64, 96, 128, 160, 192, 224, 256];
        let gain_delta = &[
            256, 6, 11, 22, 53, 185, 206, 214, 218, 221, 223, 225, 227, 228, 229, 230, 231, 232,
            233, 234, 235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249,
            250, 251, 252, 253, 254, 255, 256,
        ];

        assert_eq!(decoder.decode_symbol_with_icdf(frame_type_vad_inactive), 1);
        assert_eq!(decoder.decode_symbol_with_icdf(gain_msb_inactive), 0);
        assert_eq!(decoder.decode_symbol_with_icdf(gain_lsb), 6);
        assert_eq!(decoder.decode_symbol_with_icdf(gain_delta), 0);
        assert_eq!(decoder.decode_symbol_with_icdf(gain_delta), 3);
        assert_eq!(decoder.decode_symbol_with_icdf(gain_delta), 4);
    }

    #[test]
    fn range_size_invariant_holds_after_every_symbol() {
        let mut decoder = Decoder::new(TEST_SILK_FRAME);
        assert!(decoder.range_size() > MIN_RANGE_SIZE);

        let gain_delta = &[
            256, 6, 11, 22, 53, 185, 206, 214, 218, 221, 223, 225, 227, 228, 229, 230, 231, 232,
            233, 234, 235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249,
            250, 251, 252, 253, 254, 255, 256,
        ];

        for _ in 0..64 {
            let k = decoder.decode_symbol_with_icdf(gain_delta);
            assert!((k as usize) < gain_delta.len() - 1);
            assert!(decoder.range_size() > MIN_RANGE_SIZE);
        }
    }

    #[test]
    fn reads_past_end_of_stream_yield_zero_bits() {
        let mut decoder = Decoder::new(&[0x0b]);

        let lsb = &[256, 32, 64, 96, 128, 160, 192, 224, 256];
        for _ in 0..32 {
            let k = decoder.decode_symbol_with_icdf(lsb);
            assert!(k < 8);
            assert!(decoder.range_size() > MIN_RANGE_SIZE);
        }
    }
}
