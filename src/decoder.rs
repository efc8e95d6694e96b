// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Opus decoder.
//!
//! The Opus decoder consists of two main blocks: the SILK decoder and the
//! CELT decoder. The output of the Opus decode is the sum of the outputs from
//! the SILK and CELT decoders with proper sample rate conversion and delay
//! compensation.
//!
//! ```text
//!                        +---------+    +------------+
//!                        |  SILK   |    |   Sample   |
//!                     +->| Decoder |--->|    Rate    |----+
//! Bit-  +---------+   |  |         |    | Conversion |    v
//! strm  |  Range  |---+  +---------+    +------------+  /---\  Audio
//! ----->| Decoder |                                     | + |------>
//!       |         |---+  +---------+    +------------+  \---/
//!       +---------+   |  |  CELT   |    | Decimation |    ^
//!                     +->| Decoder |--->| (Optional) |----+
//!                        |         |    |            |
//!                        +---------+    +------------+
//! ```
//!
//! This implementation covers the SILK block for mono, single-frame, 20 ms
//! packets; every other configuration is rejected up front from the TOC byte.
//!
//! https://datatracker.ietf.org/doc/html/rfc6716#section-4

use log::{debug, warn};
use thiserror::Error;

use symphonia_core::audio::{
    AsAudioBufferRef, AudioBuffer, AudioBufferRef, Channels, Signal, SignalSpec,
};
use symphonia_core::codecs::{
    CodecDescriptor, CodecParameters, Decoder, DecoderOptions, FinalizeResult, CODEC_TYPE_OPUS,
};
use symphonia_core::errors::Result;
use symphonia_core::formats::Packet;
use symphonia_core::support_codec;

use crate::silk;
use crate::toc::{AudioMode, FrameCode, Toc};

/// Errors detected while validating the packet structure, before the SILK
/// layer runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("packet is too short to contain a table of contents header")]
    PacketTooShort,

    #[error("unsupported frame code")]
    UnsupportedFrameCode,

    #[error("unsupported configuration mode")]
    UnsupportedConfigurationMode,
}

impl From<Error> for symphonia_core::errors::Error {
    fn from(err: Error) -> Self {
        use symphonia_core::errors::Error as CoreError;

        match err {
            Error::PacketTooShort => CoreError::DecodeError("opus: packet too short"),
            Error::UnsupportedFrameCode => {
                CoreError::Unsupported("opus: multi-frame packets are not supported")
            }
            Error::UnsupportedConfigurationMode => {
                CoreError::Unsupported("opus: only the silk configuration mode is supported")
            }
        }
    }
}

/// Opus packet decoder implementing the SILK-only modes.
pub struct OpusDecoder {
    params: CodecParameters,
    silk_decoder: silk::Decoder,
    /// Bandwidth of the stream, fixed by the first decoded packet until it
    /// changes, at which point `buf` is re-allocated.
    bandwidth: Option<silk::Bandwidth>,
    buf: AudioBuffer<f32>,
    samples: [f32; 320],
}

impl OpusDecoder {
    /// Validate the packet against the supported configurations and decode
    /// its single SILK frame.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-3.1
    fn decode_inner(&mut self, packet: &Packet) -> Result<()> {
        let (&toc_byte, payload) = packet.buf().split_first().ok_or(Error::PacketTooShort)?;

        let toc = Toc::new(toc_byte);
        debug!("opus packet: toc {:#04x}, {:?}", toc_byte, toc);

        if toc.frame_code() != FrameCode::One {
            warn!("opus packet rejected: frame code {:?}", toc.frame_code());
            return Err(Error::UnsupportedFrameCode.into());
        }

        let bandwidth = match toc.audio_mode() {
            AudioMode::Silk => match toc.silk_bandwidth() {
                Some(bandwidth) => bandwidth,
                None => return Err(Error::UnsupportedConfigurationMode.into()),
            },
            mode => {
                warn!("opus packet rejected: {:?} mode", mode);
                return Err(Error::UnsupportedConfigurationMode.into());
            }
        };

        let written = self.silk_decoder.decode(
            payload,
            &mut self.samples,
            toc.is_stereo(),
            toc.frame_duration(),
            bandwidth,
        )?;

        if self.bandwidth != Some(bandwidth) {
            let spec = SignalSpec::new(bandwidth.sample_rate(), Channels::FRONT_LEFT);
            self.buf = AudioBuffer::new(bandwidth.frame_length() as u64, spec);
            self.bandwidth = Some(bandwidth);
        }

        self.buf.clear();
        self.buf.render_reserved(Some(written));
        self.buf.chan_mut(0).copy_from_slice(&self.samples[..written]);

        Ok(())
    }
}

impl Decoder for OpusDecoder {
    fn try_new(params: &CodecParameters, _options: &DecoderOptions) -> Result<Self> {
        Ok(OpusDecoder {
            params: params.clone(),
            silk_decoder: silk::Decoder::new(),
            bandwidth: None,
            buf: AudioBuffer::unused(),
            samples: [0.0; 320],
        })
    }

    fn supported_codecs() -> &'static [CodecDescriptor] {
        &[support_codec!(CODEC_TYPE_OPUS, "opus", "Opus Audio Codec")]
    }

    fn reset(&mut self) {
        self.silk_decoder.reset();
    }

    fn codec_params(&self) -> &CodecParameters {
        &self.params
    }

    fn decode(&mut self, packet: &Packet) -> Result<AudioBufferRef<'_>> {
        if let Err(err) = self.decode_inner(packet) {
            self.buf.clear();
            return Err(err);
        }
        Ok(self.buf.as_audio_buffer_ref())
    }

    fn finalize(&mut self) -> FinalizeResult {
        FinalizeResult::default()
    }

    fn last_decoded(&self) -> AudioBufferRef<'_> {
        self.buf.as_audio_buffer_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symphonia_core::errors::Error as CoreError;

    /// A valid WB, 20 ms, mono, single-frame packet: TOC for configuration 9
    /// followed by a SILK payload. Its LSF interpolation factor is 4.
    const TEST_PACKET: &[u8] = &[0x48, 0x0b, 0xe4, 0xc1, 0x36, 0xec, 0xc5, 0x80];

    /// The same configuration carrying a payload whose LSF interpolation
    /// factor is below 4, blending towards the previous frame's LSFs.
    const INTERPOLATING_PACKET: &[u8] = &[0x48, 0x35, 0x6c, 0x88, 0x91, 0x3f, 0x20, 0xf6];

    fn new_decoder() -> OpusDecoder {
        OpusDecoder::try_new(&CodecParameters::new(), &DecoderOptions::default()).unwrap()
    }

    fn decode_expecting_error(data: &[u8]) -> CoreError {
        let mut decoder = new_decoder();
        let packet = Packet::new_from_slice(0, 0, 0, data);
        match decoder.decode(&packet) {
            Err(err) => err,
            Ok(_) => panic!("expected an error decoding {:x?}", data),
        }
    }

    #[test]
    fn empty_packet_is_too_short() {
        match decode_expecting_error(&[]) {
            CoreError::DecodeError(msg) => assert_eq!(msg, "opus: packet too short"),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn silk_10ms_duration_is_rejected() {
        // Configuration 0: SILK-only, NB, 10 ms, mono, code 0.
        match decode_expecting_error(&[0x00, 0x00]) {
            CoreError::Unsupported(msg) => assert!(msg.contains("duration")),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn stereo_packet_is_rejected() {
        // Configuration 1: SILK-only, NB, 20 ms, with the stereo bit set.
        match decode_expecting_error(&[0x0c, 0x00]) {
            CoreError::Unsupported(msg) => assert!(msg.contains("stereo")),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn celt_mode_is_rejected() {
        // Configuration 16: CELT-only, NB, 2.5 ms.
        match decode_expecting_error(&[0x80, 0x00]) {
            CoreError::Unsupported(msg) => assert!(msg.contains("silk")),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn multi_frame_packet_is_rejected() {
        // Code 3 packet with a frame count byte.
        match decode_expecting_error(&[0x4b, 0x02, 0x00, 0x00]) {
            CoreError::Unsupported(msg) => assert!(msg.contains("multi-frame")),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn lbrr_packet_is_rejected() {
        // 0xff decodes to VAD = 1 followed by LBRR = 1.
        match decode_expecting_error(&[0x48, 0xff]) {
            CoreError::Unsupported(msg) => assert!(msg.contains("redundancy")),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn wideband_packet_decodes_to_full_frame() {
        let mut decoder = new_decoder();
        let packet = Packet::new_from_slice(0, 0, 0, TEST_PACKET);

        let decoded = decoder.decode(&packet).unwrap();
        assert_eq!(decoded.spec().rate, 16_000);

        match decoded {
            AudioBufferRef::F32(buf) => {
                assert_eq!(buf.frames(), 320);
                assert!(buf.chan(0).iter().all(|sample| (-1.0..=1.0).contains(sample)));
            }
            _ => panic!("unexpected sample format"),
        }
    }

    #[test]
    fn sequential_packets_cover_both_interpolation_branches() {
        let mut decoder = new_decoder();

        // The second frame interpolates towards the first; the third does
        // not. Every frame must come out whole and in range.
        for data in [TEST_PACKET, INTERPOLATING_PACKET, TEST_PACKET] {
            let packet = Packet::new_from_slice(0, 0, 0, data);
            match decoder.decode(&packet).unwrap() {
                AudioBufferRef::F32(buf) => {
                    assert_eq!(buf.frames(), 320);
                    assert!(buf.chan(0).iter().all(|sample| (-1.0..=1.0).contains(sample)));
                }
                _ => panic!("unexpected sample format"),
            }
        }
    }
}
