// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors surfaced by the SILK layer. Within a supported configuration a
/// corrupt payload is *not* detectable (the codec carries no checksum) and
/// decodes to valid-but-garbage audio; these variants cover only unsupported
/// configurations and caller contract violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("only 20 ms SILK frames are supported")]
    UnsupportedFrameDuration,

    #[error("stereo SILK frames are not supported")]
    UnsupportedStereo,

    #[error("SILK low bit-rate redundancy frames are not supported")]
    UnsupportedLowBitRateRedundancy,

    #[error("output buffer is too small for the decoded frame")]
    OutputBufferTooSmall,
}

impl From<Error> for symphonia_core::errors::Error {
    fn from(err: Error) -> Self {
        use symphonia_core::errors::Error as CoreError;

        match err {
            Error::UnsupportedFrameDuration => {
                CoreError::Unsupported("opus: silk frame duration other than 20 ms")
            }
            Error::UnsupportedStereo => CoreError::Unsupported("opus: stereo silk frames"),
            Error::UnsupportedLowBitRateRedundancy => {
                CoreError::Unsupported("opus: silk low bit-rate redundancy frames")
            }
            Error::OutputBufferTooSmall => CoreError::DecodeError("opus: output buffer too small"),
        }
    }
}
