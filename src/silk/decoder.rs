// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The SILK frame decoder.
//!
//! An overview of the decoder is given in Figure 14 of RFC 6716.
//!
//! ```text
//!      +---------+    +------------+
//!   -->| Range   |--->| Decode     |---------------------------+
//!    1 | Decoder | 2  | Parameters |----------+       5        |
//!      +---------+    +------------+     4    |                |
//!                          3 |                |                |
//!                           \/               \/               \/
//!                     +------------+   +------------+   +------------+
//!                     | Generate   |-->| LTP        |-->| LPC        |
//!                     | Excitation |   | Synthesis  |   | Synthesis  |
//!                     +------------+   +------------+   +------------+
//!
//!   1: Range encoded bitstream
//!   2: Coded parameters
//!   3: Pulses, LSBs, and signs
//!   4: Pitch lags, Long-Term Prediction (LTP) coefficients
//!   5: Linear Predictive Coding (LPC) coefficients and gains
//! ```
//!
//! https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.1

use log::debug;

use crate::common::{ilog, mul_round, mul_shift};
use crate::range;
use crate::silk::codebook::*;
use crate::silk::error::Error;
use crate::silk::excitation;
use crate::silk::frame::{FrameType, QuantizationOffsetType, SignalType, SubframeParams};
use crate::silk::{Bandwidth, MAX_LPC_ORDER, SUBFRAME_COUNT};
use crate::toc::FrameDuration;

/// Samples in the largest supported frame (WB, 20 ms).
const MAX_FRAME_LENGTH: usize = 320;

/// Order of the long-term prediction filter.
const LTP_ORDER: usize = 5;

/// Largest primary pitch lag of any supported bandwidth.
const MAX_PITCH_LAG: usize = 288;

/// Residual history required left of the frame: the deepest LTP read reaches
/// back `pitch_lag + LTP_ORDER / 2` samples.
const RES_HISTORY: usize = MAX_PITCH_LAG + LTP_ORDER / 2;

/// Output history required left of the frame: rewhitening runs the LPC filter
/// over the `RES_HISTORY` deep output reads.
const OUT_HISTORY: usize = RES_HISTORY + MAX_LPC_ORDER;

/// Decoder for the SILK layer of a mono Opus stream.
///
/// One instance owns all state carried between frames: the gain of the last
/// subframe, the previous frame's normalized LSFs (for interpolation), its
/// voicing (for lag coding), and the tail of its LPC synthesis output (to
/// seed the next frame's synthesis filter).
pub struct Decoder {
    /// False until the first frame has decoded successfully.
    have_decoded: bool,
    is_previous_frame_voiced: bool,
    previous_log_gain: i32,
    /// Normalized LSFs of the previous frame, `n0` during interpolation.
    previous_nlsf_q15: [i16; MAX_LPC_ORDER],
    /// Final `MAX_LPC_ORDER` LPC-domain samples of the previous frame.
    previous_frame_lpc_values: [f32; MAX_LPC_ORDER],
}

impl Decoder {
    pub fn new() -> Self {
        Decoder {
            have_decoded: false,
            is_previous_frame_voiced: false,
            previous_log_gain: 0,
            previous_nlsf_q15: [0; MAX_LPC_ORDER],
            previous_frame_lpc_values: [0.0; MAX_LPC_ORDER],
        }
    }

    /// Drop all cross-frame state, as after a seek.
    pub fn reset(&mut self) {
        *self = Decoder::new();
    }

    /// Decode one 20 ms SILK frame from `data` into `out`, returning the
    /// number of samples written.
    ///
    /// `data` holds the range-coded payload, i.e. every byte of the Opus
    /// packet after the TOC byte.
    pub fn decode(
        &mut self,
        data: &[u8],
        out: &mut [f32],
        is_stereo: bool,
        duration: FrameDuration,
        bandwidth: Bandwidth,
    ) -> Result<usize, Error> {
        if duration != FrameDuration::Ms20 {
            return Err(Error::UnsupportedFrameDuration);
        }
        if is_stereo {
            return Err(Error::UnsupportedStereo);
        }

        let frame_length = bandwidth.frame_length();
        if out.len() < frame_length {
            return Err(Error::OutputBufferTooSmall);
        }

        let lpc_order = bandwidth.lpc_order();
        let mut range_decoder = range::Decoder::new(data);

        // Header bits: one VAD flag (one frame per packet), then the LBRR
        // presence flag.
        //
        // https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.3
        let voice_activity_detected = range_decoder.decode_symbol_logp(1) == 1;
        let low_bit_rate_redundancy = range_decoder.decode_symbol_logp(1) == 1;
        if low_bit_rate_redundancy {
            return Err(Error::UnsupportedLowBitRateRedundancy);
        }

        let frame_type = Self::determine_frame_type(&mut range_decoder, voice_activity_detected);

        debug!(
            "silk frame: {:?}/{:?}, previous voiced: {}",
            frame_type.signal_type, frame_type.quantization_offset_type,
            self.is_previous_frame_voiced,
        );

        let mut subframes = [SubframeParams::default(); SUBFRAME_COUNT];

        let gains = self.decode_subframe_quantizations(&mut range_decoder, frame_type.signal_type);
        for (subframe, gain) in subframes.iter_mut().zip(gains) {
            subframe.gain = gain;
        }

        // Normalized LSFs: two-stage VQ, reconstruction, and stabilization.
        let i1 =
            Self::normalize_lsf_stage_one(&mut range_decoder, bandwidth, frame_type.is_voiced());
        let res_q10 = Self::normalize_lsf_stage_two(&mut range_decoder, bandwidth, i1);
        let mut nlsf_q15 = Self::normalize_lsf_coefficients(bandwidth, &res_q10, i1);
        Self::stabilize_nlsf(bandwidth, &mut nlsf_q15[..lpc_order]);

        // For 20 ms frames an interpolation factor follows. Unless it is 4,
        // the first two subframes run on LPCs interpolated towards the
        // previous frame's LSFs.
        //
        // https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.5
        let w_q2 =
            range_decoder.decode_symbol_with_icdf(ICDF_NORMALIZED_LSF_INTERPOLATION_INDEX) as i32;
        let interpolated = w_q2 < 4 && self.have_decoded;

        let a_q12 = Self::lpc_coefficients_from_nlsf(bandwidth, &nlsf_q15[..lpc_order]);

        let a_q12_first_half = if interpolated {
            let n1_q15 = Self::interpolate_nlsf(
                &self.previous_nlsf_q15[..lpc_order],
                &nlsf_q15[..lpc_order],
                w_q2,
            );
            Some(Self::lpc_coefficients_from_nlsf(bandwidth, &n1_q15[..lpc_order]))
        }
        else {
            None
        };

        if frame_type.is_voiced() {
            let pitch_lags = Self::decode_pitch_lags(&mut range_decoder, bandwidth);
            let ltp_filters = Self::decode_ltp_filter_coefficients(&mut range_decoder);
            for (subframe, (pitch_lag, ltp_taps)) in
                subframes.iter_mut().zip(pitch_lags.into_iter().zip(ltp_filters))
            {
                subframe.pitch_lag = pitch_lag;
                subframe.ltp_taps = ltp_taps;
            }
        }

        let ltp_scale = Self::decode_ltp_scaling(&mut range_decoder, frame_type.is_voiced());

        // Excitation: LCG seed, rate level, then the shell blocks.
        let lcg_seed = excitation::decode_lcg_seed(&mut range_decoder);
        let shell_blocks = bandwidth.shell_blocks();
        let rate_level = excitation::decode_rate_level(&mut range_decoder, frame_type.is_voiced());
        let (pulse_counts, lsb_counts) =
            excitation::decode_pulse_and_lsb_counts(&mut range_decoder, shell_blocks, rate_level);

        let mut e_q23 = [0i32; MAX_FRAME_LENGTH];
        excitation::decode_excitation(
            &mut range_decoder,
            frame_type,
            lcg_seed,
            &pulse_counts[..shell_blocks],
            &lsb_counts[..shell_blocks],
            &mut e_q23[..frame_length],
        );

        self.synthesize_frame(
            out,
            bandwidth,
            frame_type,
            &subframes,
            &e_q23,
            &a_q12,
            a_q12_first_half.as_ref(),
            interpolated,
            ltp_scale,
        );

        self.previous_nlsf_q15 = nlsf_q15;
        self.is_previous_frame_voiced = frame_type.is_voiced();
        self.have_decoded = true;

        Ok(frame_length)
    }

    /// Each SILK frame contains a single "frame type" symbol that jointly
    /// codes the signal type and quantization offset type of the frame.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.3
    fn determine_frame_type(
        range_decoder: &mut range::Decoder<'_>,
        voice_activity_detected: bool,
    ) -> FrameType {
        let frame_type_symbol = if voice_activity_detected {
            range_decoder.decode_symbol_with_icdf(ICDF_FRAME_TYPE_VAD_ACTIVE) + 2
        }
        else {
            range_decoder.decode_symbol_with_icdf(ICDF_FRAME_TYPE_VAD_INACTIVE)
        };

        let (signal_type, quantization_offset_type) = match frame_type_symbol {
            0 => (SignalType::Inactive, QuantizationOffsetType::Low),
            1 => (SignalType::Inactive, QuantizationOffsetType::High),
            2 => (SignalType::Unvoiced, QuantizationOffsetType::Low),
            3 => (SignalType::Unvoiced, QuantizationOffsetType::High),
            4 => (SignalType::Voiced, QuantizationOffsetType::Low),
            _ => (SignalType::Voiced, QuantizationOffsetType::High),
        };

        FrameType { signal_type, quantization_offset_type }
    }

    /// Decode one quantization gain per 5 ms subframe.
    ///
    /// The first subframe is coded independently: 3 MSBs from a PDF selected
    /// by the signal type, 3 uniform LSBs, limited against the final gain of
    /// the previous frame. Later subframes code a delta against the previous
    /// subframe.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.4
    fn decode_subframe_quantizations(
        &mut self,
        range_decoder: &mut range::Decoder<'_>,
        signal_type: SignalType,
    ) -> [f32; SUBFRAME_COUNT] {
        let msb_icdf = match signal_type {
            SignalType::Inactive => ICDF_INDEPENDENT_QUANTIZATION_GAIN_MSB[0],
            SignalType::Unvoiced => ICDF_INDEPENDENT_QUANTIZATION_GAIN_MSB[1],
            SignalType::Voiced => ICDF_INDEPENDENT_QUANTIZATION_GAIN_MSB[2],
        };

        let mut gains = [0.0; SUBFRAME_COUNT];

        for (s, gain) in gains.iter_mut().enumerate() {
            let log_gain = if s == 0 {
                let msb = range_decoder.decode_symbol_with_icdf(msb_icdf) as i32;
                let lsb = range_decoder
                    .decode_symbol_with_icdf(ICDF_INDEPENDENT_QUANTIZATION_GAIN_LSB)
                    as i32;
                let gain_index = (msb << 3) | lsb;

                if self.have_decoded {
                    gain_index.max(self.previous_log_gain - 16)
                }
                else {
                    gain_index
                }
            }
            else {
                let delta =
                    range_decoder.decode_symbol_with_icdf(ICDF_DELTA_QUANTIZATION_GAIN) as i32;

                (2 * delta - 16).max(self.previous_log_gain + delta - 4).clamp(0, 63)
            };

            self.previous_log_gain = log_gain;
            *gain = Self::dequantize_log_gain(log_gain);
        }

        gains
    }

    /// Convert a log-scale gain index into a linear gain, using the bit-exact
    /// integer approximations of `silk_log2lin`, then scale out of Q16.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.4
    fn dequantize_log_gain(log_gain: i32) -> f32 {
        let in_log_q7 = mul_shift(0x1D1C71, log_gain, 16) + 2090;
        let i = in_log_q7 >> 7;
        let f = in_log_q7 & 127;

        let gain_q16 = (1 << i) + (((-174 * f * (128 - f)) >> 16) + f) * ((1 << i) >> 7);

        gain_q16 as f32 / 65536.0
    }

    /// Stage 1: one index `I1` in [0, 31] selecting the codebook vector, from
    /// a PDF keyed by bandwidth and voicing.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.1
    fn normalize_lsf_stage_one(
        range_decoder: &mut range::Decoder<'_>,
        bandwidth: Bandwidth,
        voiced: bool,
    ) -> usize {
        let icdf = match bandwidth {
            Bandwidth::Narrowband | Bandwidth::Mediumband => {
                ICDF_NORMALIZED_LSF_STAGE_ONE_NB_MB[usize::from(voiced)]
            }
            Bandwidth::Wideband => ICDF_NORMALIZED_LSF_STAGE_ONE_WB[usize::from(voiced)],
        };

        range_decoder.decode_symbol_with_icdf(icdf) as usize
    }

    /// Stage 2: one index per coefficient from a codebook chosen by `I1`,
    /// extended past +/-4 by an extension PDF, then dequantized into Q10
    /// residuals with backwards prediction.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.2
    fn normalize_lsf_stage_two(
        range_decoder: &mut range::Decoder<'_>,
        bandwidth: Bandwidth,
        i1: usize,
    ) -> [i16; MAX_LPC_ORDER] {
        let (select, step_q16): (&[u8], i32) = match bandwidth {
            Bandwidth::Narrowband | Bandwidth::Mediumband => {
                (&SELECT_NORMALIZED_LSF_STAGE_TWO_NB_MB[i1], 11796)
            }
            Bandwidth::Wideband => (&SELECT_NORMALIZED_LSF_STAGE_TWO_WB[i1], 9830),
        };

        let mut indices = [0i32; MAX_LPC_ORDER];
        for (k, index) in indices.iter_mut().take(select.len()).enumerate() {
            let icdf = ICDF_NORMALIZED_LSF_STAGE_TWO[select[k] as usize];
            let mut i2 = range_decoder.decode_symbol_with_icdf(icdf) as i32 - 4;

            // The two extreme values code an extension with matching sign.
            if i2 == -4 {
                i2 -= range_decoder
                    .decode_symbol_with_icdf(ICDF_NORMALIZED_LSF_STAGE_TWO_EXTENSION)
                    as i32;
            }
            else if i2 == 4 {
                i2 += range_decoder
                    .decode_symbol_with_icdf(ICDF_NORMALIZED_LSF_STAGE_TWO_EXTENSION)
                    as i32;
            }

            *index = i2;
        }

        let (weights, weight_select): ([&[u8]; 2], &[u8]) = match bandwidth {
            Bandwidth::Narrowband | Bandwidth::Mediumband => (
                [&PREDICTION_WEIGHT_NB_MB[0], &PREDICTION_WEIGHT_NB_MB[1]],
                &SELECT_PREDICTION_WEIGHT_NB_MB[i1],
            ),
            Bandwidth::Wideband => (
                [&PREDICTION_WEIGHT_WB[0], &PREDICTION_WEIGHT_WB[1]],
                &SELECT_PREDICTION_WEIGHT_WB[i1],
            ),
        };

        let d_lpc = select.len();
        let mut res_q10 = [0i16; MAX_LPC_ORDER];

        for k in (0..d_lpc).rev() {
            let predicted_q10 = if k + 1 < d_lpc {
                let weight_q8 = i32::from(weights[weight_select[k] as usize][k]);
                (i32::from(res_q10[k + 1]) * weight_q8) >> 8
            }
            else {
                0
            };

            let i2 = indices[k];
            let dequantized_q10 = (((i2 << 10) - i2.signum() * 102) * step_q16) >> 16;

            res_q10[k] = (predicted_q10 + dequantized_q10) as i16;
        }

        res_q10
    }

    /// Reconstruct the normalized LSF coefficients from the stage-1 codebook
    /// vector and the stage-2 residuals, weighting each residual by the
    /// square-root approximation of the codebook-derived weight.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.3
    fn normalize_lsf_coefficients(
        bandwidth: Bandwidth,
        res_q10: &[i16; MAX_LPC_ORDER],
        i1: usize,
    ) -> [i16; MAX_LPC_ORDER] {
        let cb1_q8: &[u8] = match bandwidth {
            Bandwidth::Narrowband | Bandwidth::Mediumband => {
                &CODEBOOK_NORMALIZED_LSF_STAGE_ONE_NB_MB[i1]
            }
            Bandwidth::Wideband => &CODEBOOK_NORMALIZED_LSF_STAGE_ONE_WB[i1],
        };

        let d_lpc = cb1_q8.len();
        let mut nlsf_q15 = [0i16; MAX_LPC_ORDER];

        for k in 0..d_lpc {
            let previous = if k > 0 { i32::from(cb1_q8[k - 1]) } else { 0 };
            let current = i32::from(cb1_q8[k]);
            let next = if k + 1 < d_lpc { i32::from(cb1_q8[k + 1]) } else { 256 };

            let w2_q18 = (1024 / (current - previous) + 1024 / (next - current)) << 16;

            // Approximate sqrt(w2) in Q9 per RFC 6716 section 4.2.7.5.3.
            let i = ilog(w2_q18);
            let f = (w2_q18 >> (i - 8)) & 127;
            let y = if i & 1 == 1 { 32768 } else { 46214 } >> ((32 - i) >> 1);
            let w_q9 = y + ((213 * f * y) >> 16);

            let nlsf = (current << 7) + (i32::from(res_q10[k]) << 14) / w_q9;
            nlsf_q15[k] = nlsf.clamp(0, 32767) as i16;
        }

        nlsf_q15
    }

    /// Enforce the minimum spacing between adjacent normalized LSFs: up to 20
    /// rounds of moving the most offending pair towards each other, then a
    /// fallback that sorts and clamps against both spectrum edges.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.4
    fn stabilize_nlsf(bandwidth: Bandwidth, nlsf_q15: &mut [i16]) {
        let spacing: &[i32] = match bandwidth {
            Bandwidth::Narrowband | Bandwidth::Mediumband => &MINIMUM_NORMALIZED_LSF_SPACING_NB_MB,
            Bandwidth::Wideband => &MINIMUM_NORMALIZED_LSF_SPACING_WB,
        };

        let d_lpc = nlsf_q15.len();

        for _ in 0..20 {
            let mut min_diff = 0;
            let mut min_index = 0;

            for i in 0..=d_lpc {
                let low = if i == 0 { 0 } else { i32::from(nlsf_q15[i - 1]) };
                let high = if i == d_lpc { 32768 } else { i32::from(nlsf_q15[i]) };
                let diff = high - low - spacing[i];

                if diff < min_diff {
                    min_diff = diff;
                    min_index = i;
                }
            }

            if min_diff == 0 {
                return;
            }

            if min_index == 0 {
                nlsf_q15[0] = spacing[0] as i16;
            }
            else if min_index == d_lpc {
                nlsf_q15[d_lpc - 1] = (32768 - spacing[d_lpc]) as i16;
            }
            else {
                let half_delta = spacing[min_index] >> 1;
                let min_center = spacing[..min_index].iter().sum::<i32>() + half_delta;
                let max_center = 32768 - spacing[min_index + 1..].iter().sum::<i32>() - half_delta;

                let sum = i32::from(nlsf_q15[min_index - 1]) + i32::from(nlsf_q15[min_index]);
                let center = (sum >> 1) + (sum & 1);

                nlsf_q15[min_index - 1] =
                    (center.max(min_center).min(max_center) - half_delta) as i16;
                nlsf_q15[min_index] = nlsf_q15[min_index - 1] + spacing[min_index] as i16;
            }
        }

        // Fallback after 20 rounds: sort, then walk the spacing forwards from
        // 0 and backwards from 32768.
        nlsf_q15.sort_unstable();

        let mut previous = 0;
        for (k, nlsf) in nlsf_q15.iter_mut().enumerate() {
            let lowest = previous + spacing[k];
            if i32::from(*nlsf) < lowest {
                *nlsf = lowest as i16;
            }
            previous = i32::from(*nlsf);
        }

        let mut next = 32768;
        for (k, nlsf) in nlsf_q15.iter_mut().enumerate().rev() {
            let highest = next - spacing[k + 1];
            if i32::from(*nlsf) > highest {
                *nlsf = highest as i16;
            }
            next = i32::from(*nlsf);
        }
    }

    /// Blend the previous frame's normalized LSFs towards the current
    /// frame's: `n1[k] = n0[k] + (w_q2 * (n2[k] - n0[k]) >> 2)`.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.5
    fn interpolate_nlsf(n0_q15: &[i16], n2_q15: &[i16], w_q2: i32) -> [i16; MAX_LPC_ORDER] {
        let mut n1_q15 = [0i16; MAX_LPC_ORDER];

        for (n1, (&n0, &n2)) in n1_q15.iter_mut().zip(n0_q15.iter().zip(n2_q15)) {
            let n0 = i32::from(n0);
            let n2 = i32::from(n2);
            *n1 = (n0 + ((w_q2 * (n2 - n0)) >> 2)) as i16;
        }

        n1_q15
    }

    /// Produce the short-term synthesis coefficients for one set of
    /// normalized LSFs: convert to 32-bit Q17 LPCs, then limit their range
    /// and the filter's prediction gain, yielding Q12 coefficients as floats.
    fn lpc_coefficients_from_nlsf(bandwidth: Bandwidth, nlsf_q15: &[i16]) -> [f32; MAX_LPC_ORDER] {
        let mut a32_q17 = Self::convert_nlsf_to_lpc_coefficients(bandwidth, nlsf_q15);
        Self::limit_lpc_coefficients_range(&mut a32_q17[..nlsf_q15.len()]);
        Self::limit_lpc_filter_prediction_gain(&mut a32_q17[..nlsf_q15.len()])
    }

    /// Convert normalized LSFs into LPC coefficients by reordering into the
    /// cosine domain and expanding the P and Q polynomials. Intermediate
    /// products of the Q17 cosines and Q16 polynomial values need 64 bits.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.6
    fn convert_nlsf_to_lpc_coefficients(
        bandwidth: Bandwidth,
        nlsf_q15: &[i16],
    ) -> [i32; MAX_LPC_ORDER] {
        let ordering: &[usize] = match bandwidth {
            Bandwidth::Narrowband | Bandwidth::Mediumband => &LSF_ORDERING_NB_MB,
            Bandwidth::Wideband => &LSF_ORDERING_WB,
        };

        let d_lpc = nlsf_q15.len();

        // Cosine approximation, linearly interpolated between table entries.
        let mut c_q17 = [0i32; MAX_LPC_ORDER];
        for (&nlsf, &position) in nlsf_q15.iter().zip(ordering) {
            let index = (nlsf >> 8) as usize;
            let fraction = i32::from(nlsf & 255);

            let cos = Q12_COSINE[index];
            let next_cos = Q12_COSINE[index + 1];

            c_q17[position] = (cos * 256 + (next_cos - cos) * fraction + 4) >> 3;
        }

        let mut p_q16 = [0i32; MAX_LPC_ORDER / 2 + 1];
        let mut q_q16 = [0i32; MAX_LPC_ORDER / 2 + 1];

        p_q16[0] = 1 << 16;
        q_q16[0] = 1 << 16;
        p_q16[1] = -c_q17[0];
        q_q16[1] = -c_q17[1];

        for k in 1..d_lpc / 2 {
            p_q16[k + 1] = p_q16[k - 1] * 2 - mul_round(c_q17[2 * k], p_q16[k], 16);
            q_q16[k + 1] = q_q16[k - 1] * 2 - mul_round(c_q17[2 * k + 1], q_q16[k], 16);

            for j in (2..=k).rev() {
                p_q16[j] += p_q16[j - 2] - mul_round(c_q17[2 * k], p_q16[j - 1], 16);
                q_q16[j] += q_q16[j - 2] - mul_round(c_q17[2 * k + 1], q_q16[j - 1], 16);
            }

            p_q16[1] -= c_q17[2 * k];
            q_q16[1] -= c_q17[2 * k + 1];
        }

        let mut a32_q17 = [0i32; MAX_LPC_ORDER];
        for k in 0..d_lpc / 2 {
            let p_sum = p_q16[k + 1] + p_q16[k];
            let q_diff = q_q16[k + 1] - q_q16[k];

            a32_q17[k] = -q_diff - p_sum;
            a32_q17[d_lpc - k - 1] = q_diff - p_sum;
        }

        a32_q17
    }

    /// Apply up to 10 rounds of bandwidth expansion until every coefficient
    /// fits 16 bits in Q12, saturating if the rounds run out.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.7
    fn limit_lpc_coefficients_range(a32_q17: &mut [i32]) {
        let mut converged = false;

        for _ in 0..10 {
            // The first of the largest-magnitude coefficients.
            let mut max_index = 0;
            let mut max_abs = 0;
            for (k, &a) in a32_q17.iter().enumerate() {
                if a.abs() > max_abs {
                    max_abs = a.abs();
                    max_index = k;
                }
            }

            let max_abs_q12 = ((max_abs + 16) >> 5).min(163838);
            if max_abs_q12 <= 32767 {
                converged = true;
                break;
            }

            let chirp_start_q16 = 65470
                - ((max_abs_q12 - 32767) << 14) / ((max_abs_q12 * (max_index as i32 + 1)) >> 2);
            let mut chirp_q16 = chirp_start_q16;

            for a in a32_q17.iter_mut() {
                *a = mul_round(*a, chirp_q16, 16);
                chirp_q16 =
                    ((i64::from(chirp_start_q16) * i64::from(chirp_q16) + 32768) >> 16) as i32;
            }
        }

        if !converged {
            for a in a32_q17.iter_mut() {
                *a = ((*a + 16) >> 5).clamp(-32768, 32767) << 5;
            }
        }
    }

    /// Apply up to 16 further rounds of bandwidth expansion until the
    /// synthesis filter is provably stable, then hand the Q12 coefficients
    /// out as floats.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.5.8
    fn limit_lpc_filter_prediction_gain(a32_q17: &mut [i32]) -> [f32; MAX_LPC_ORDER] {
        let d_lpc = a32_q17.len();

        let mut a_q12 = [0i32; MAX_LPC_ORDER];
        for (q12, &q17) in a_q12.iter_mut().zip(a32_q17.iter()) {
            *q12 = (q17 + 16) >> 5;
        }

        for round in 1..=16 {
            if Self::is_lpc_filter_stable(&a_q12[..d_lpc]) {
                break;
            }

            let chirp_start_q16 = 65536 - (1 << round);
            let mut chirp_q16 = chirp_start_q16;

            for (q17, q12) in a32_q17.iter_mut().zip(a_q12.iter_mut()) {
                *q17 = mul_round(*q17, chirp_q16, 16);
                *q12 = (*q17 + 16) >> 5;
                chirp_q16 =
                    ((i64::from(chirp_start_q16) * i64::from(chirp_q16) + 32768) >> 16) as i32;
            }
        }

        let mut coefficients = [0.0; MAX_LPC_ORDER];
        for (value, &q12) in coefficients.iter_mut().zip(a_q12.iter()) {
            *value = q12 as f32 / 4096.0;
        }

        coefficients
    }

    /// Fixed-point test of synthesis filter stability: bounded DC response,
    /// bounded reflection coefficients, and an inverse prediction gain of at
    /// least 1/4096, computed by the Levinson recurrence of
    /// `silk_LPC_inverse_pred_gain`.
    fn is_lpc_filter_stable(a_q12: &[i32]) -> bool {
        let dc_response: i32 = a_q12.iter().sum();
        if dc_response > 4096 {
            return false;
        }

        let mut even = [0i32; MAX_LPC_ORDER];
        let mut odd = [0i32; MAX_LPC_ORDER];
        for (c, &a) in even.iter_mut().zip(a_q12) {
            *c = a * 4096;
        }

        let mut inverse_gain_q30 = 1i32 << 30;
        let mut k = a_q12.len() - 1;
        let mut a_q24 = even[k];

        loop {
            if a_q24.abs() > 16773022 {
                return false;
            }

            let rc_q31 = -a_q24 * 128;
            let div_q30 = (1 << 30) - mul_shift(rc_q31, rc_q31, 32);
            inverse_gain_q30 = mul_shift(inverse_gain_q30, div_q30, 32) << 2;

            if k == 0 {
                return inverse_gain_q30 >= 107374;
            }

            // Fixed-point inverse of div_q30 for the row update.
            let b1 = ilog(div_q30);
            let b2 = b1 - 16;
            let inverse = ((1 << 29) - 1) / (div_q30 >> (b2 + 1));
            let error_q29 = (1 << 29) - mul_shift(div_q30 << (15 - b2), inverse, 16);
            let gain = (inverse << 16) + ((i64::from(error_q29) * i64::from(inverse)) >> 13) as i32;

            let (previous, current) =
                if k % 2 == 1 { (&mut even, &mut odd) } else { (&mut odd, &mut even) };

            for j in 0..k {
                let value = i64::from(previous[j])
                    - i64::from(mul_shift(previous[k - j - 1], rc_q31, 31));
                let row = (value * i64::from(gain)) >> b1;

                // A row update that no longer fits 32 bits marks the filter
                // unstable rather than wrapping.
                if row > i64::from(i32::MAX) || row < i64::from(i32::MIN) {
                    return false;
                }

                current[j] = row as i32;
            }

            k -= 1;
            a_q24 = current[k];
        }
    }

    /// Decode the primary pitch lag and the per-subframe contour.
    ///
    /// With one SILK frame per packet the lag is always coded absolutely; the
    /// relative path only applies to later frames of 40 and 60 ms packets.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.6.1
    fn decode_pitch_lags(
        range_decoder: &mut range::Decoder<'_>,
        bandwidth: Bandwidth,
    ) -> [i32; SUBFRAME_COUNT] {
        let (low_part_icdf, scale, min_lag, max_lag): (&[u32], i32, i32, i32) = match bandwidth {
            Bandwidth::Narrowband => (ICDF_PRIMARY_PITCH_LAG_LOW_PART_NB, 4, 16, 144),
            Bandwidth::Mediumband => (ICDF_PRIMARY_PITCH_LAG_LOW_PART_MB, 6, 24, 216),
            Bandwidth::Wideband => (ICDF_PRIMARY_PITCH_LAG_LOW_PART_WB, 8, 32, 288),
        };

        let high_part =
            range_decoder.decode_symbol_with_icdf(ICDF_PRIMARY_PITCH_LAG_HIGH_PART) as i32;
        let low_part = range_decoder.decode_symbol_with_icdf(low_part_icdf) as i32;

        let lag = high_part * scale + low_part + min_lag;

        let offsets: &[i8; SUBFRAME_COUNT] = match bandwidth {
            Bandwidth::Narrowband => {
                let contour =
                    range_decoder.decode_symbol_with_icdf(ICDF_SUBFRAME_PITCH_CONTOUR_NB) as usize;
                &CODEBOOK_SUBFRAME_PITCH_CONTOUR_NB[contour]
            }
            Bandwidth::Mediumband | Bandwidth::Wideband => {
                let contour = range_decoder
                    .decode_symbol_with_icdf(ICDF_SUBFRAME_PITCH_CONTOUR_MB_WB)
                    as usize;
                &CODEBOOK_SUBFRAME_PITCH_CONTOUR_MB_WB[contour]
            }
        };

        let mut pitch_lags = [0; SUBFRAME_COUNT];
        for (pitch_lag, &offset) in pitch_lags.iter_mut().zip(offsets) {
            *pitch_lag = (lag + i32::from(offset)).clamp(min_lag, max_lag);
        }

        pitch_lags
    }

    /// Decode the 5-tap LTP filter of each subframe from the codebook bank
    /// selected by the periodicity index.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.6.2
    fn decode_ltp_filter_coefficients(
        range_decoder: &mut range::Decoder<'_>,
    ) -> [[f32; LTP_ORDER]; SUBFRAME_COUNT] {
        let periodicity = range_decoder.decode_symbol_with_icdf(ICDF_PERIODICITY_INDEX) as usize;

        let bank: &[[i8; LTP_ORDER]] = match periodicity {
            0 => &CODEBOOK_LTP_FILTER_PERIODICITY_0,
            1 => &CODEBOOK_LTP_FILTER_PERIODICITY_1,
            _ => &CODEBOOK_LTP_FILTER_PERIODICITY_2,
        };

        let mut filters = [[0.0; LTP_ORDER]; SUBFRAME_COUNT];
        for filter in filters.iter_mut() {
            let index =
                range_decoder.decode_symbol_with_icdf(ICDF_LTP_FILTER_INDEX[periodicity]) as usize;
            for (tap, &b_q7) in filter.iter_mut().zip(&bank[index]) {
                *tap = f32::from(b_q7) / 128.0;
            }
        }

        filters
    }

    /// Voiced frames of a single-frame packet always carry an LTP scaling
    /// parameter; unvoiced frames use the default factor 15565 / 16384.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.6.3
    fn decode_ltp_scaling(range_decoder: &mut range::Decoder<'_>, voiced: bool) -> f32 {
        let scale_q14 = if voiced {
            let index = range_decoder.decode_symbol_with_icdf(ICDF_LTP_SCALING_PARAMETER) as usize;
            LTP_SCALE_Q14[index]
        }
        else {
            LTP_SCALE_Q14[0]
        };

        scale_q14 as f32 / 16384.0
    }

    /// Run LTP and LPC synthesis over the four subframes and write the
    /// clamped output samples.
    ///
    /// Reconstruction works in three frame-local buffers with enough history
    /// to the left of the frame for the deepest reads: `res` (the excitation
    /// after long-term prediction), `lpc` (unclamped short-term synthesis
    /// output), and `out` (clamped output). Only the final LPC values carry
    /// across frames; earlier history reads as zero.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.9
    #[allow(clippy::too_many_arguments)]
    fn synthesize_frame(
        &mut self,
        out: &mut [f32],
        bandwidth: Bandwidth,
        frame_type: FrameType,
        subframes: &[SubframeParams; SUBFRAME_COUNT],
        e_q23: &[i32; MAX_FRAME_LENGTH],
        a_q12: &[f32; MAX_LPC_ORDER],
        a_q12_first_half: Option<&[f32; MAX_LPC_ORDER]>,
        interpolated: bool,
        ltp_scale: f32,
    ) {
        let n = bandwidth.subframe_length();
        let d_lpc = bandwidth.lpc_order();
        let frame_length = bandwidth.frame_length();

        let mut res = [0.0f32; RES_HISTORY + MAX_FRAME_LENGTH];
        let mut lpc = [0.0f32; MAX_LPC_ORDER + MAX_FRAME_LENGTH];
        let mut out_history = [0.0f32; OUT_HISTORY + MAX_FRAME_LENGTH];

        lpc[..MAX_LPC_ORDER].copy_from_slice(&self.previous_frame_lpc_values);

        for (s, subframe) in subframes.iter().enumerate() {
            let j = (s * n) as i32;
            let gain = subframe.gain;

            let coefficients = match a_q12_first_half {
                Some(first_half) if s < 2 => &first_half[..d_lpc],
                _ => &a_q12[..d_lpc],
            };

            if frame_type.is_voiced() {
                let lag = subframe.pitch_lag;

                // Past samples are rewhitened through the current subframe's
                // filter so the long-term predictor sees a consistent
                // residual. For the third and fourth subframes of an
                // interpolated frame the boundary moves up to the second
                // half, and the scale becomes unity (16384 in Q14).
                let (out_end, rewhitening_scale) = if s < 2 || !interpolated {
                    (j - (s as i32) * n as i32, ltp_scale)
                }
                else {
                    (j - (s as i32 - 2) * n as i32, 1.0)
                };

                // Rewhitened, clamped output samples.
                for i in (j - lag - 2)..out_end {
                    let out_index = (OUT_HISTORY as i32 + i) as usize;

                    let mut value = out_history[out_index];
                    for (k, &a) in coefficients.iter().enumerate() {
                        value -= a * out_history[out_index - k - 1];
                    }

                    res[(RES_HISTORY as i32 + i) as usize] =
                        (rewhitening_scale / gain) * value.clamp(-1.0, 1.0);
                }

                // Rewhitened, unclamped LPC-domain samples of the current
                // frame, rescaled by the current subframe's gain.
                for i in out_end..j {
                    let lpc_index = (MAX_LPC_ORDER as i32 + i) as usize;

                    let mut value = lpc[lpc_index];
                    for (k, &a) in coefficients.iter().enumerate() {
                        value -= a * lpc[lpc_index - k - 1];
                    }

                    res[(RES_HISTORY as i32 + i) as usize] = value / gain;
                }

                // Long-term prediction over the rewhitened residual.
                for i in j..j + n as i32 {
                    let res_index = (RES_HISTORY as i32 + i) as usize;

                    let mut value = e_q23[i as usize] as f32 / 8388608.0;
                    for (k, &b) in subframe.ltp_taps.iter().enumerate() {
                        value += b * res[(res_index as i32 - lag + 2 - k as i32) as usize];
                    }

                    res[res_index] = value;
                }
            }
            else {
                for i in s * n..(s + 1) * n {
                    res[RES_HISTORY + i] = e_q23[i] as f32 / 8388608.0;
                }
            }

            // Short-term LPC synthesis; the unclamped value feeds the filter
            // history, the clamped value is the output.
            for i in s * n..(s + 1) * n {
                let lpc_index = MAX_LPC_ORDER + i;

                let mut value = gain * res[RES_HISTORY + i];
                for (k, &a) in coefficients.iter().enumerate() {
                    value += a * lpc[lpc_index - k - 1];
                }

                lpc[lpc_index] = value;
                out_history[OUT_HISTORY + i] = value.clamp(-1.0, 1.0);
            }
        }

        self.previous_frame_lpc_values
            .copy_from_slice(&lpc[frame_length..frame_length + MAX_LPC_ORDER]);

        out[..frame_length].copy_from_slice(&out_history[OUT_HISTORY..OUT_HISTORY + frame_length]);
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SILK_FRAME: &[u8] = &[0x0b, 0xe4, 0xc1, 0x36, 0xec, 0xc5, 0x80];

    fn test_res_q10() -> [i16; MAX_LPC_ORDER] {
        let mut res_q10 = [0i16; MAX_LPC_ORDER];
        res_q10[0] = 138;
        res_q10
    }

    const TEST_NLSF_Q15: [i16; MAX_LPC_ORDER] = [
        2132, 3584, 5504, 7424, 9472, 11392, 13440, 15360, 17280, 19200, 21120, 23040, 25088,
        27008, 28928, 30848,
    ];

    /// A WB payload whose LSF interpolation factor is 2, so a decoder that
    /// has already produced a frame blends the first two subframes' LPCs.
    const INTERPOLATING_SILK_FRAME: &[u8] = &[0x35, 0x6c, 0x88, 0x91, 0x3f, 0x20, 0xf6];

    /// The normalized LSFs coded by [`INTERPOLATING_SILK_FRAME`].
    const INTERPOLATING_FRAME_NLSF_Q15: [i16; MAX_LPC_ORDER] = [
        768, 2048, 4224, 5888, 7680, 9600, 11776, 13696, 15744, 17536, 19968, 21632, 23680,
        25472, 27392, 28800,
    ];

    #[test]
    fn rejects_unsupported_durations_and_stereo() {
        let mut decoder = Decoder::new();
        let mut out = [0.0; 320];

        let result = decoder
            .decode(TEST_SILK_FRAME, &mut out, false, FrameDuration::Ms10, Bandwidth::Wideband);
        assert_eq!(result, Err(Error::UnsupportedFrameDuration));

        let result = decoder
            .decode(TEST_SILK_FRAME, &mut out, true, FrameDuration::Ms20, Bandwidth::Wideband);
        assert_eq!(result, Err(Error::UnsupportedStereo));
    }

    #[test]
    fn rejects_short_output_buffer() {
        let mut decoder = Decoder::new();
        let mut out = [0.0; 319];

        let result = decoder
            .decode(TEST_SILK_FRAME, &mut out, false, FrameDuration::Ms20, Bandwidth::Wideband);
        assert_eq!(result, Err(Error::OutputBufferTooSmall));
    }

    #[test]
    fn determine_frame_type_inactive_high() {
        let mut range_decoder =
            range::Decoder::with_state(TEST_SILK_FRAME, 31, 536870912, 437100388);

        let frame_type = Decoder::determine_frame_type(&mut range_decoder, false);
        assert_eq!(frame_type.signal_type, SignalType::Inactive);
        assert_eq!(frame_type.quantization_offset_type, QuantizationOffsetType::High);
    }

    #[test]
    fn decode_subframe_quantizations_dequantizes_gains() {
        let mut decoder = Decoder::new();
        let mut range_decoder =
            range::Decoder::with_state(TEST_SILK_FRAME, 31, 482344960, 437100388);

        let gains =
            decoder.decode_subframe_quantizations(&mut range_decoder, SignalType::Inactive);
        assert_eq!(gains, [3.21875, 1.71875, 1.46875, 1.46875]);
    }

    #[test]
    fn normalize_lsf_stage_one_decodes_index() {
        let mut range_decoder =
            range::Decoder::with_state(TEST_SILK_FRAME, 47, 722810880, 387065757);

        let i1 = Decoder::normalize_lsf_stage_one(&mut range_decoder, Bandwidth::Wideband, false);
        assert_eq!(i1, 9);
    }

    #[test]
    fn normalize_lsf_stage_two_dequantizes_residuals() {
        let mut range_decoder = range::Decoder::with_state(TEST_SILK_FRAME, 47, 50822640, 5895957);

        let res_q10 =
            Decoder::normalize_lsf_stage_two(&mut range_decoder, Bandwidth::Wideband, 9);
        assert_eq!(res_q10, test_res_q10());
    }

    #[test]
    fn normalize_lsf_coefficients_reconstructs_nlsf() {
        let nlsf_q15 =
            Decoder::normalize_lsf_coefficients(Bandwidth::Wideband, &test_res_q10(), 9);
        assert_eq!(nlsf_q15, TEST_NLSF_Q15);
    }

    #[test]
    fn stabilize_nlsf_preserves_well_spaced_coefficients() {
        let mut nlsf_q15 = TEST_NLSF_Q15;
        Decoder::stabilize_nlsf(Bandwidth::Wideband, &mut nlsf_q15);
        assert_eq!(nlsf_q15, TEST_NLSF_Q15);
    }

    #[test]
    fn stabilize_nlsf_enforces_minimum_spacing() {
        let mut nlsf_q15 = [0i16; 10];
        Decoder::stabilize_nlsf(Bandwidth::Narrowband, &mut nlsf_q15);

        let spacing = &MINIMUM_NORMALIZED_LSF_SPACING_NB_MB;
        let mut previous = 0;
        for (k, &nlsf) in nlsf_q15.iter().enumerate() {
            assert!(i32::from(nlsf) - previous >= spacing[k]);
            previous = i32::from(nlsf);
        }
        assert!(32768 - previous >= spacing[10]);
    }

    #[test]
    fn convert_nlsf_to_lpc_coefficients_matches_reference() {
        let nlsf_q15: [i16; 16] = [
            0x854, 0xe00, 0x1580, 0x1d00, 0x2500, 0x2c80, 0x3480, 0x3c00, 0x4380, 0x4b00, 0x5280,
            0x5a00, 0x6200, 0x6980, 0x7100, 0x7880,
        ];

        let a32_q17 = Decoder::convert_nlsf_to_lpc_coefficients(Bandwidth::Wideband, &nlsf_q15);
        assert_eq!(
            a32_q17,
            [
                12974, 9765, 4176, 3646, -3766, -4429, -2292, -4663, -3441, -3848, -4493, -1614,
                -1960, -3112, -2153, -2898,
            ]
        );
    }

    #[test]
    fn limit_lpc_coefficients_range_bounds_q12_magnitudes() {
        let mut a32_q17 = [
            12974, 9765, 4176, 3646, -3766, -4429, -2292, -4663, -3441, -3848, -4493, -1614,
            -1960, -3112, -2153, -2898,
        ];

        Decoder::limit_lpc_coefficients_range(&mut a32_q17);
        for &a in a32_q17.iter() {
            assert!(((a + 16) >> 5).abs() <= 32767);
        }

        // Extreme values must converge or saturate within ten rounds.
        let mut extreme = [i32::MAX / 2; 16];
        Decoder::limit_lpc_coefficients_range(&mut extreme);
        for &a in extreme.iter() {
            assert!(((a + 16) >> 5).abs() <= 32767);
        }
    }

    #[test]
    fn decode_writes_full_frame_and_updates_state() {
        let mut decoder = Decoder::new();
        let mut out = [0.0f32; 320];

        let written = decoder
            .decode(TEST_SILK_FRAME, &mut out, false, FrameDuration::Ms20, Bandwidth::Wideband)
            .unwrap();

        assert_eq!(written, 320);
        assert!(out.iter().all(|sample| (-1.0..=1.0).contains(sample)));

        assert!(decoder.have_decoded);
        assert!(!decoder.is_previous_frame_voiced);
        assert_eq!(decoder.previous_nlsf_q15, TEST_NLSF_Q15);
    }

    #[test]
    fn interpolate_nlsf_blends_towards_previous_coefficients() {
        let n0_q15: [i16; MAX_LPC_ORDER] = [
            1000, 3000, 5000, 7000, 9000, 11000, 13000, 15000, 17000, 19000, 21000, 23000, 25000,
            27000, 29000, 31000,
        ];
        let n2_q15: [i16; MAX_LPC_ORDER] = [
            700, 3300, 5900, 7424, 8999, 12000, 13003, 15360, 17280, 19200, 21120, 23040, 25088,
            27008, 28928, 30848,
        ];

        assert_eq!(Decoder::interpolate_nlsf(&n0_q15, &n2_q15, 0), n0_q15);
        assert_eq!(Decoder::interpolate_nlsf(&n0_q15, &n2_q15, 4), n2_q15);

        // Negative differences round towards negative infinity.
        assert_eq!(
            Decoder::interpolate_nlsf(&n0_q15, &n2_q15, 1),
            [
                925, 3075, 5225, 7106, 8999, 11250, 13000, 15090, 17070, 19050, 21030, 23010,
                25022, 27002, 28982, 30962,
            ]
        );
    }

    #[test]
    fn decode_interpolates_lsfs_for_first_half_when_signaled() {
        let mut plain = Decoder::new();
        let mut out_plain = [0.0f32; 320];
        plain
            .decode(
                INTERPOLATING_SILK_FRAME,
                &mut out_plain,
                false,
                FrameDuration::Ms20,
                Bandwidth::Wideband,
            )
            .unwrap();
        assert_eq!(plain.previous_nlsf_q15, INTERPOLATING_FRAME_NLSF_Q15);

        // Same state apart from the previous frame's LSFs; with
        // previous_log_gain at 0 the gain limiting is a no-op, so any output
        // difference can only flow through the interpolation path.
        let mut seeded = Decoder::new();
        seeded.have_decoded = true;
        seeded.previous_nlsf_q15 = TEST_NLSF_Q15;

        let mut out_interpolated = [0.0f32; 320];
        seeded
            .decode(
                INTERPOLATING_SILK_FRAME,
                &mut out_interpolated,
                false,
                FrameDuration::Ms20,
                Bandwidth::Wideband,
            )
            .unwrap();

        assert_eq!(
            Decoder::interpolate_nlsf(&TEST_NLSF_Q15, &INTERPOLATING_FRAME_NLSF_Q15, 2),
            [
                1450, 2816, 4864, 6656, 8576, 10496, 12608, 14528, 16512, 18368, 20544, 22336,
                24384, 26240, 28160, 29824,
            ]
        );

        assert!(out_interpolated.iter().zip(out_plain.iter()).any(|(a, b)| a != b));
        assert!(out_interpolated.iter().all(|sample| (-1.0..=1.0).contains(sample)));

        // The carry keeps the frame's own LSFs, never the blended set.
        assert_eq!(seeded.previous_nlsf_q15, INTERPOLATING_FRAME_NLSF_Q15);
    }

    #[test]
    fn decode_consecutive_frames_reuses_carry_without_panic() {
        let mut decoder = Decoder::new();
        let mut out = [0.0f32; 320];

        for _ in 0..2 {
            let written = decoder
                .decode(TEST_SILK_FRAME, &mut out, false, FrameDuration::Ms20, Bandwidth::Wideband)
                .unwrap();
            assert_eq!(written, 320);
            assert!(out.iter().all(|sample| (-1.0..=1.0).contains(sample)));
        }
    }

    #[test]
    fn reset_clears_cross_frame_state() {
        let mut decoder = Decoder::new();
        let mut out = [0.0f32; 320];

        decoder
            .decode(TEST_SILK_FRAME, &mut out, false, FrameDuration::Ms20, Bandwidth::Wideband)
            .unwrap();
        assert!(decoder.have_decoded);

        decoder.reset();
        assert!(!decoder.have_decoded);
        assert_eq!(decoder.previous_log_gain, 0);
        assert_eq!(decoder.previous_nlsf_q15, [0; MAX_LPC_ORDER]);
    }
}
