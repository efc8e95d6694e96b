// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Opus decoder.
//!
//! Opus (RFC 6716) couples two coding layers: the SILK linear-prediction layer
//! for speech and the CELT transform layer for music. This decoder implements
//! the SILK layer for mono, single-frame, 20 ms packets; packets selecting the
//! CELT or Hybrid modes are rejected as unsupported.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]
// The following lints are allowed in all Symphonia crates.
#![allow(clippy::comparison_chain)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::identity_op)]
#![allow(clippy::manual_range_contains)]

mod common;
mod decoder;
mod range;
mod silk;
mod toc;

pub use decoder::OpusDecoder;
