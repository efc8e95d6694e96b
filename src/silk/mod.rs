// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The SILK linear-prediction layer.
//!
//! The decoder's LP layer uses a modified version of the SILK codec, which
//! runs a decoded excitation signal through adaptive long-term and short-term
//! prediction synthesis filters. It runs at NB, MB, and WB sample rates
//! internally.
//!
//! https://datatracker.ietf.org/doc/html/rfc6716#section-4.2

pub(crate) mod codebook;
mod decoder;
mod error;
mod excitation;
mod frame;

pub use decoder::Decoder;
pub use error::Error;
pub use frame::{FrameType, QuantizationOffsetType, SignalType};

/// Maximum LPC filter order (`d_LPC`); 10 for NB/MB, 16 for WB.
pub(crate) const MAX_LPC_ORDER: usize = 16;

/// Number of 5 ms subframes in a 20 ms SILK frame.
pub(crate) const SUBFRAME_COUNT: usize = 4;

/// SILK-layer audio bandwidth. A SILK-only Opus configuration selects one of
/// these; the wider Hybrid bandwidths still run the LP layer at WB and are
/// out of scope here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bandwidth {
    Narrowband,
    Mediumband,
    Wideband,
}

impl Bandwidth {
    /// The effective sample rate of the decoded signal, in Hz.
    pub fn sample_rate(&self) -> u32 {
        match self {
            Bandwidth::Narrowband => 8_000,
            Bandwidth::Mediumband => 12_000,
            Bandwidth::Wideband => 16_000,
        }
    }

    /// Samples per 5 ms subframe.
    pub(crate) fn subframe_length(&self) -> usize {
        match self {
            Bandwidth::Narrowband => 40,
            Bandwidth::Mediumband => 60,
            Bandwidth::Wideband => 80,
        }
    }

    /// Samples per 20 ms frame.
    pub(crate) fn frame_length(&self) -> usize {
        SUBFRAME_COUNT * self.subframe_length()
    }

    /// The LPC filter order `d_LPC`.
    pub(crate) fn lpc_order(&self) -> usize {
        match self {
            Bandwidth::Narrowband | Bandwidth::Mediumband => 10,
            Bandwidth::Wideband => 16,
        }
    }

    /// Number of 16-sample shell blocks coding the excitation of a 20 ms
    /// frame.
    ///
    /// https://datatracker.ietf.org/doc/html/rfc6716#section-4.2.7.8
    pub(crate) fn shell_blocks(&self) -> usize {
        match self {
            Bandwidth::Narrowband => 10,
            Bandwidth::Mediumband => 15,
            Bandwidth::Wideband => 20,
        }
    }
}
