// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque asset handle types.

use core::fmt;

/// An opaque reference to an externally loaded tile set.
///
/// Tile sets are created and managed outside this crate (e.g. by an asset
/// pipeline). The core only carries the handle; serialization ignores it
/// and uses the layer's display name instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilesetId(pub u32);

impl fmt::Debug for TilesetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TilesetId({})", self.0)
    }
}

/// An opaque reference to an externally loaded image.
///
/// Same contract as [`TilesetId`]: never inspected by the core.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}
