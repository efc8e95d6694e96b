// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Excitation decoding.
//!
//! SILK codes the excitation using a modified version of the Pyramid Vector
//! Quantizer (PVQ) codebook. The codebook dimension is fixed at N = 16, so
//! the excitation is made up of a number of 16-sample "shell blocks". Unlike
//! regular PVQ, the encoding is variable-length, and large codebooks are
//! handled by coding the least significant bits of each coefficient directly.
//!
//! https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8

use crate::range;
use crate::silk::codebook::*;
use crate::silk::frame::{FrameType, QuantizationOffsetType, SignalType};

/// Largest shell block count of any supported frame (WB, 20 ms).
pub const MAX_SHELL_BLOCKS: usize = 20;

/// Samples per shell block.
const SHELL_BLOCK_LENGTH: usize = 16;

/// A pulse count of 17 escapes into LSB coding.
const ESCAPE_PULSE_COUNT: u32 = 17;

/// Decode the seed for the linear congruential generator used to scramble
/// excitation signs.
///
/// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.7
pub fn decode_lcg_seed(range_decoder: &mut range::Decoder<'_>) -> u32 {
    range_decoder.decode_symbol_with_icdf(ICDF_LINEAR_CONGRUENTIAL_GENERATOR_SEED)
}

/// Decode the rate level in [0, 8], shared by all shell blocks of the frame.
///
/// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8.1
pub fn decode_rate_level(range_decoder: &mut range::Decoder<'_>, voiced: bool) -> usize {
    range_decoder.decode_symbol_with_icdf(ICDF_RATE_LEVEL[usize::from(voiced)]) as usize
}

/// Decode the pulse count and LSB depth of each shell block.
///
/// A decoded value of 17 escapes: the count is re-read from the rate level 9
/// table, adding one LSB per attempt, and from the rate level 10 table (in
/// which 17 is impossible) once ten LSBs have accumulated.
///
/// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8.2
pub fn decode_pulse_and_lsb_counts(
    range_decoder: &mut range::Decoder<'_>,
    shell_blocks: usize,
    rate_level: usize,
) -> ([u8; MAX_SHELL_BLOCKS], [u8; MAX_SHELL_BLOCKS]) {
    let mut pulse_counts = [0u8; MAX_SHELL_BLOCKS];
    let mut lsb_counts = [0u8; MAX_SHELL_BLOCKS];

    for block in 0..shell_blocks {
        let mut count = range_decoder.decode_symbol_with_icdf(ICDF_PULSE_COUNT[rate_level]);

        while count == ESCAPE_PULSE_COUNT {
            lsb_counts[block] += 1;
            let table = if lsb_counts[block] == 10 { 10 } else { 9 };
            count = range_decoder.decode_symbol_with_icdf(ICDF_PULSE_COUNT[table]);
        }

        pulse_counts[block] = count as u8;
    }

    (pulse_counts, lsb_counts)
}

/// Decode the excitation of one frame into `e_q23`, whose length selects the
/// number of shell blocks. Pulse locations, LSBs, and signs are read in that
/// order, then the magnitudes are offset and their signs scrambled with the
/// LCG.
///
/// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8.3
pub fn decode_excitation(
    range_decoder: &mut range::Decoder<'_>,
    frame_type: FrameType,
    mut seed: u32,
    pulse_counts: &[u8],
    lsb_counts: &[u8],
    e_q23: &mut [i32],
) {
    debug_assert_eq!(e_q23.len() % SHELL_BLOCK_LENGTH, 0);

    e_q23.fill(0);

    // Pulse locations for every block, by recursive binary partition.
    for (&count, block) in pulse_counts.iter().zip(e_q23.chunks_mut(SHELL_BLOCK_LENGTH)) {
        if count > 0 {
            decode_pulse_locations(range_decoder, block, i32::from(count));
        }
    }

    // LSBs, appended below the pulse magnitudes most significant bit first,
    // for every sample of a block with a non-zero LSB depth.
    //
    // https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8.4
    for (&lsb_count, block) in lsb_counts.iter().zip(e_q23.chunks_mut(SHELL_BLOCK_LENGTH)) {
        for sample in block.iter_mut() {
            for _ in 0..lsb_count {
                let bit = range_decoder.decode_symbol_with_icdf(ICDF_EXCITATION_LSB);
                *sample = (*sample << 1) | bit as i32;
            }
        }
    }

    // Signs for every non-zero magnitude. The ICDF is keyed by the signal
    // type, the quantization offset type, and the block's pulse count capped
    // at six; LSBs do not affect the selection.
    //
    // https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8.5
    for (&count, block) in pulse_counts.iter().zip(e_q23.chunks_mut(SHELL_BLOCK_LENGTH)) {
        let icdf = sign_icdf(frame_type, count);
        for sample in block.iter_mut() {
            if *sample != 0 && range_decoder.decode_symbol_with_icdf(icdf) == 0 {
                *sample = -*sample;
            }
        }
    }

    // Reconstruction: lift the magnitudes to Q23, apply the quantization
    // offset, and scramble the signs with the LCG so that the resulting
    // pseudorandom noise stays reproducible at the decoder.
    //
    // https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8.6
    let offset_q23 = quantization_offset(frame_type);

    for sample in e_q23.iter_mut() {
        let raw = *sample;
        let mut value = (raw << 8) - raw.signum() * 20 + offset_q23;

        seed = seed.wrapping_mul(196_314_165).wrapping_add(907_633_515);
        if seed & 0x8000_0000 != 0 {
            value = -value;
        }
        seed = seed.wrapping_add(raw as u32);

        *sample = value;
    }
}

/// Split the pulses of a partition between its halves until single samples
/// remain. Partitions without pulses consume no symbols.
fn decode_pulse_locations(
    range_decoder: &mut range::Decoder<'_>,
    samples: &mut [i32],
    pulses: i32,
) {
    if samples.len() == 1 {
        samples[0] = pulses;
        return;
    }

    let table = match samples.len() {
        16 => &ICDF_PULSE_LOCATION_PARTITION_16,
        8 => &ICDF_PULSE_LOCATION_PARTITION_8,
        4 => &ICDF_PULSE_LOCATION_PARTITION_4,
        _ => &ICDF_PULSE_LOCATION_PARTITION_2,
    };

    let left = range_decoder.decode_symbol_with_icdf(table[(pulses - 1) as usize]) as i32;
    let right = pulses - left;

    let (first, second) = samples.split_at_mut(samples.len() / 2);
    if left > 0 {
        decode_pulse_locations(range_decoder, first, left);
    }
    if right > 0 {
        decode_pulse_locations(range_decoder, second, right);
    }
}

fn sign_icdf(frame_type: FrameType, pulse_count: u8) -> &'static [u32] {
    use QuantizationOffsetType::{High, Low};

    let group = match (frame_type.signal_type, frame_type.quantization_offset_type) {
        (SignalType::Inactive, Low) => &ICDF_EXCITATION_SIGN_INACTIVE_LOW,
        (SignalType::Inactive, High) => &ICDF_EXCITATION_SIGN_INACTIVE_HIGH,
        (SignalType::Unvoiced, Low) => &ICDF_EXCITATION_SIGN_UNVOICED_LOW,
        (SignalType::Unvoiced, High) => &ICDF_EXCITATION_SIGN_UNVOICED_HIGH,
        (SignalType::Voiced, Low) => &ICDF_EXCITATION_SIGN_VOICED_LOW,
        (SignalType::Voiced, High) => &ICDF_EXCITATION_SIGN_VOICED_HIGH,
    };

    group[usize::min(pulse_count as usize, 6)]
}

/// Quantization offset by frame type, Q23 (RFC 6716 Table 53).
fn quantization_offset(frame_type: FrameType) -> i32 {
    use QuantizationOffsetType::{High, Low};

    match (frame_type.signal_type, frame_type.quantization_offset_type) {
        (SignalType::Inactive, Low) => 25,
        (SignalType::Inactive, High) => 60,
        (SignalType::Unvoiced, Low) => 25,
        (SignalType::Unvoiced, High) => 60,
        (SignalType::Voiced, Low) => 8,
        (SignalType::Voiced, High) => 25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::silk::Bandwidth;

    #[test]
    fn decode_excitation_matches_reference_unvoiced_frame() {
        let frame: &[u8] = &[
            0x84, 0x2e, 0x67, 0xd3, 0x85, 0x65, 0x54, 0xe3, 0x9d, 0x90, 0x0a, 0xfa, 0x98, 0xea,
            0xfd, 0x98, 0x94, 0x41, 0xf9, 0x6d, 0x1d, 0xa0,
        ];
        let mut range_decoder = range::Decoder::with_state(frame, 71, 851775140, 846837397);

        let frame_type = FrameType {
            signal_type: SignalType::Unvoiced,
            quantization_offset_type: QuantizationOffsetType::Low,
        };

        let seed = decode_lcg_seed(&mut range_decoder);
        let shell_blocks = Bandwidth::Wideband.shell_blocks();
        let rate_level = decode_rate_level(&mut range_decoder, frame_type.is_voiced());
        let (pulse_counts, lsb_counts) =
            decode_pulse_and_lsb_counts(&mut range_decoder, shell_blocks, rate_level);

        let mut e_q23 = [0i32; 320];
        decode_excitation(
            &mut range_decoder,
            frame_type,
            seed,
            &pulse_counts[..shell_blocks],
            &lsb_counts[..shell_blocks],
            &mut e_q23,
        );

        #[rustfmt::skip]
        let expected: [i32; 320] = [
            25, -25, -25, -25, 25, 25, -25, 25, 25, -25, 25, -25, -25, -25, 25, 25, -25,
            25, 25, 25, 25, -211, -25, -25, 25, -25, 25, -25, 25, -25, -25, -25, 25, 25,
            -25, -25, 261, 517, -25, 25, -25, -25, -25, -25, -25, -25, 25, -25, -25, 25,
            -25, 25, -25, 25, 25, 25, 25, -25, 25, -25, 25, 25, 25, 25, -25, 25, 25, 25,
            25, -25, -25, -25, -25, -25, -25, -25, 25, 25, -25, 25, 211, 25, -25, -25,
            25, 211, 25, 25, 25, -25, 25, 25, -25, -25, -25, 25, 25, 25, 25, -25, 25, 25,
            -25, 25, 25, 25, 25, 25, -25, -25, 25, -25, -25, 25, 25, -25, 25, 25, 25, -25,
            -25, -25, -25, -25, -25, 25, 25, 25, 25, 25, -25, 25, -25, -25, 25, 25, 25, 25,
            25, 25, 25, -25, 25, -211, 25, -25, -25, 25, 25, -25, -25, -25, -25, -25, -25,
            -25, 25, 25, -25, -25, 25, 25, -25, 25, -25, -25, -25, 25, 25, -25, 25, -25, -211,
            -25, 25, 25, 25, -25, -25, -25, -25, 25, 25, -25, -25, 25, -25, -25, 25, 25, 25,
            -25, -25, -25, -25, -25, 25, 25, -25, -211, 25, -25, 25, 25, -25, -25, 25, -25,
            25, -25, 25, 25, -25, -211, -25, 25, 25, -25, 25, 25, -25, -211, -25, 25, 25, 25,
            -25, -25, -25, -25, 25, -211, 25, 25, 25, 25, 25, 25, -25, -25, 25, -25, 517, 517,
            -467, -25, 25, 25, -25, -25, 25, -25, 25, 25, 25, -25, -25, -25, 25, 25, -25, -25,
            25, -25, 25, -25, 25, -25, 25, -25, -25, -25, 25, 25, -25, -25, 211, 25, 25, 25, 25,
            -25, -25, 25, -25, -25, -25, -25, 211, -25, 25, -25, -25, 25, -25, -25, 25,
            -25, 25, -25, 25, 25, -25, 25, -25, 25, 25, 25, 25, -25, -25, -25, 25, -25, 25, 25,
            -25, -25, -25, 25,
        ];

        assert_eq!(e_q23, expected);
    }

    #[test]
    fn quantization_offsets_follow_table_53() {
        let ft = |signal_type, quantization_offset_type| FrameType {
            signal_type,
            quantization_offset_type,
        };

        use QuantizationOffsetType::{High, Low};
        assert_eq!(quantization_offset(ft(SignalType::Inactive, Low)), 25);
        assert_eq!(quantization_offset(ft(SignalType::Inactive, High)), 60);
        assert_eq!(quantization_offset(ft(SignalType::Unvoiced, Low)), 25);
        assert_eq!(quantization_offset(ft(SignalType::Unvoiced, High)), 60);
        assert_eq!(quantization_offset(ft(SignalType::Voiced, Low)), 8);
        assert_eq!(quantization_offset(ft(SignalType::Voiced, High)), 25);
    }
}
