// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass-through color storage.

/// Four RGBA channel values, stored and echoed verbatim.
///
/// The core performs no color-space math and no validation: channels are
/// carried exactly as given and rendered exactly as given. Whether values
/// are `0.0..=1.0` or `0..=255` is a contract between the caller and its
/// rendering backend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Creates a color from four channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}
