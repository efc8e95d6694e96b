// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The table-of-contents (TOC) byte.
//!
//! A well-formed Opus packet MUST contain at least one byte. This byte forms a
//! table-of-contents header that signals which of the various modes and
//! configurations a given packet uses. It is composed of a configuration
//! number, "config", a stereo flag, "s", and a frame count code, "c":
//!
//! ```text
//!      0
//!      0 1 2 3 4 5 6 7
//!     +-+-+-+-+-+-+-+-+
//!     | config  |s| c |
//!     +-+-+-+-+-+-+-+-+
//! ```
//!
//! https://datatracker.ietf.org/doc/html/rfc6716#section-3.1

/// Operating mode selected by the configuration number.
///
/// ```text
/// +-----------------------+-----------+-----------+-------------------+
/// | Configuration         | Mode      | Bandwidth | Frame Sizes       |
/// | Number(s)             |           |           |                   |
/// +-----------------------+-----------+-----------+-------------------+
/// | 0...3                 | SILK-only | NB        | 10, 20, 40, 60 ms |
/// | 4...7                 | SILK-only | MB        | 10, 20, 40, 60 ms |
/// | 8...11                | SILK-only | WB        | 10, 20, 40, 60 ms |
/// | 12...13               | Hybrid    | SWB       | 10, 20 ms         |
/// | 14...15               | Hybrid    | FB        | 10, 20 ms         |
/// | 16...19               | CELT-only | NB        | 2.5, 5, 10, 20 ms |
/// | 20...23               | CELT-only | WB        | 2.5, 5, 10, 20 ms |
/// | 24...27               | CELT-only | SWB       | 2.5, 5, 10, 20 ms |
/// | 28...31               | CELT-only | FB        | 2.5, 5, 10, 20 ms |
/// +-----------------------+-----------+-----------+-------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioMode {
    Silk,
    Hybrid,
    Celt,
}

/// Frame duration selected by the configuration number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDuration {
    Ms2_5,
    Ms5,
    Ms10,
    Ms20,
    Ms40,
    Ms60,
}

/// The frame count code, "c", in the two least significant TOC bits.
///
/// https://datatracker.ietf.org/doc/html/rfc6716#section-3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCode {
    /// Code 0: one frame in the packet.
    One,
    /// Code 1: two frames in the packet, each with equal compressed size.
    TwoEqual,
    /// Code 2: two frames in the packet, with different compressed sizes.
    TwoDifferent,
    /// Code 3: an arbitrary number of frames in the packet.
    Arbitrary,
}

/// A parsed TOC byte. Every byte value is a syntactically valid TOC; whether
/// the configuration is *supported* is for the decoder to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toc {
    config: u8,
    stereo: bool,
    frame_code: FrameCode,
}

impl Toc {
    pub fn new(byte: u8) -> Self {
        let frame_code = match byte & 0b11 {
            0 => FrameCode::One,
            1 => FrameCode::TwoEqual,
            2 => FrameCode::TwoDifferent,
            _ => FrameCode::Arbitrary,
        };

        Toc { config: byte >> 3, stereo: (byte >> 2) & 1 == 1, frame_code }
    }

    pub fn is_stereo(&self) -> bool {
        self.stereo
    }

    pub fn frame_code(&self) -> FrameCode {
        self.frame_code
    }

    pub fn audio_mode(&self) -> AudioMode {
        match self.config {
            0..=11 => AudioMode::Silk,
            12..=15 => AudioMode::Hybrid,
            _ => AudioMode::Celt,
        }
    }

    /// The frame duration coded by this configuration, per the table above.
    pub fn frame_duration(&self) -> FrameDuration {
        match self.config {
            0..=11 => match self.config % 4 {
                0 => FrameDuration::Ms10,
                1 => FrameDuration::Ms20,
                2 => FrameDuration::Ms40,
                _ => FrameDuration::Ms60,
            },
            12..=15 => {
                if self.config % 2 == 0 {
                    FrameDuration::Ms10
                }
                else {
                    FrameDuration::Ms20
                }
            }
            _ => match self.config % 4 {
                0 => FrameDuration::Ms2_5,
                1 => FrameDuration::Ms5,
                2 => FrameDuration::Ms10,
                _ => FrameDuration::Ms20,
            },
        }
    }

    /// The SILK-layer bandwidth for a SILK-only configuration, or `None` for
    /// Hybrid and CELT-only configurations.
    pub fn silk_bandwidth(&self) -> Option<crate::silk::Bandwidth> {
        match self.config {
            0..=3 => Some(crate::silk::Bandwidth::Narrowband),
            4..=7 => Some(crate::silk::Bandwidth::Mediumband),
            8..=11 => Some(crate::silk::Bandwidth::Wideband),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::silk::Bandwidth;

    #[test]
    fn parses_silk_only_configurations() {
        // Config 9: SILK-only, WB, 20 ms. Mono, code 0.
        let toc = Toc::new(0x48);
        assert_eq!(toc.audio_mode(), AudioMode::Silk);
        assert_eq!(toc.frame_duration(), FrameDuration::Ms20);
        assert_eq!(toc.silk_bandwidth(), Some(Bandwidth::Wideband));
        assert!(!toc.is_stereo());
        assert_eq!(toc.frame_code(), FrameCode::One);
    }

    #[test]
    fn parses_stereo_and_frame_code_bits() {
        let toc = Toc::new(0x0d);
        assert_eq!(toc.audio_mode(), AudioMode::Silk);
        assert!(toc.is_stereo());
        assert_eq!(toc.frame_code(), FrameCode::TwoEqual);

        let toc = Toc::new(0x03);
        assert!(!toc.is_stereo());
        assert_eq!(toc.frame_code(), FrameCode::Arbitrary);
    }

    #[test]
    fn parses_celt_and_hybrid_modes() {
        // Config 16: CELT-only, NB, 2.5 ms.
        let toc = Toc::new(0x80);
        assert_eq!(toc.audio_mode(), AudioMode::Celt);
        assert_eq!(toc.silk_bandwidth(), None);
        assert_eq!(toc.frame_duration(), FrameDuration::Ms2_5);

        // Config 12: Hybrid, SWB, 10 ms.
        let toc = Toc::new(0x60);
        assert_eq!(toc.audio_mode(), AudioMode::Hybrid);
        assert_eq!(toc.silk_bandwidth(), None);
        assert_eq!(toc.frame_duration(), FrameDuration::Ms10);
    }

    #[test]
    fn config_zero_is_silk_only() {
        let toc = Toc::new(0x00);
        assert_eq!(toc.audio_mode(), AudioMode::Silk);
        assert_eq!(toc.frame_duration(), FrameDuration::Ms10);
        assert_eq!(toc.silk_bandwidth(), Some(Bandwidth::Narrowband));
    }
}
