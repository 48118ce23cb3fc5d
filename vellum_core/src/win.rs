// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level composition descriptions.
//!
//! A [`WinOp`] places things in screen space: references to externally
//! managed tile layers and images, translated, recolored, or mirrored
//! subtrees, and immediate-mode shape descriptions embedded through the
//! one-way lift. The asset handles on the leaves are opaque; serialization
//! uses only the display name.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::asset::{ImageId, TilesetId};
use crate::color::Rgba;
use crate::imd::ImdOp;
use crate::pretty::{Pretty, push_indented};

/// A drawing description in screen/window coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum WinOp {
    /// A named tile layer backed by an optional tile-set handle.
    TileLayer {
        /// Opaque handle to the backing tile set, if any.
        tileset: Option<TilesetId>,
        /// Display name, used by serialization.
        name: String,
    },
    /// A named image backed by an optional image handle.
    Image {
        /// Opaque handle to the backing image, if any.
        image: Option<ImageId>,
        /// Display name, used by serialization.
        name: String,
    },
    /// An ordered list of operations, rendered first to last.
    ///
    /// Same semantics as [`ImdOp::Sequence`]: order preserved exactly,
    /// nested sequences stay nested, empty is legal.
    Sequence(Vec<WinOp>),
    /// A translation annotation wrapping another operation.
    Moved {
        /// Displacement in pixels; positive x is right, positive y is up.
        delta: Vec2,
        /// The wrapped operation.
        op: Box<WinOp>,
    },
    /// A color annotation wrapping another operation.
    Colored {
        /// The annotating color.
        color: Rgba,
        /// The wrapped operation.
        op: Box<WinOp>,
    },
    /// A reflection around the vertical (Y) axis.
    Mirrored(Box<WinOp>),
    /// An immediate-mode shape description embedded for rendering in
    /// screen space.
    ///
    /// The only bridge between the two geometric algebras; there is no
    /// inverse lift.
    Lifted(ImdOp),
}

impl WinOp {
    /// Creates a tile-layer leaf.
    #[must_use]
    pub fn tile_layer(tileset: Option<TilesetId>, name: impl Into<String>) -> Self {
        Self::TileLayer {
            tileset,
            name: name.into(),
        }
    }

    /// Creates an image leaf.
    #[must_use]
    pub fn image(image: Option<ImageId>, name: impl Into<String>) -> Self {
        Self::Image {
            image,
            name: name.into(),
        }
    }

    /// Creates an ordered sequence from zero or more operations.
    #[must_use]
    pub fn sequence(ops: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(ops.into_iter().collect())
    }

    /// Wraps an operation with a translation annotation.
    #[must_use]
    pub fn moved(delta: Vec2, op: Self) -> Self {
        Self::Moved {
            delta,
            op: Box::new(op),
        }
    }

    /// Wraps an operation with a color annotation.
    #[must_use]
    pub fn colored(color: Rgba, op: Self) -> Self {
        Self::Colored {
            color,
            op: Box::new(op),
        }
    }

    /// Wraps an operation with a reflection around the vertical axis.
    #[must_use]
    pub fn mirrored(op: Self) -> Self {
        Self::Mirrored(Box::new(op))
    }

    /// Lifts an immediate-mode description into the window-level algebra.
    #[inline]
    #[must_use]
    pub fn lift(op: ImdOp) -> Self {
        Self::Lifted(op)
    }
}

impl From<ImdOp> for WinOp {
    fn from(op: ImdOp) -> Self {
        Self::Lifted(op)
    }
}

/// Renders one axis of a `Moved` delta as `"{magnitude} pixels {word}"`.
///
/// The magnitude is the absolute value truncated toward zero, never
/// rounded. The sign only selects the direction word; an exact zero takes
/// the positive word.
fn move_clause(value: f64, positive: &str, negative: &str) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "pixel counts are truncated toward zero by contract"
    )]
    let magnitude = value.abs() as i64;
    let word = if value >= 0.0 { positive } else { negative };
    format!("{magnitude} pixels {word}")
}

impl Pretty for WinOp {
    fn pretty(&self) -> String {
        match self {
            Self::TileLayer { name, .. } => format!("TileLayer \"{name}\""),
            Self::Image { name, .. } => format!("Image \"{name}\""),
            Self::Sequence(ops) => {
                let mut out = String::from("WinOp Sequence:");
                for op in ops {
                    push_indented(&mut out, &op.pretty());
                }
                out
            }
            Self::Moved { delta, op } => {
                let mut out = format!(
                    "Moved {} {}:",
                    move_clause(delta.x, "right", "left"),
                    move_clause(delta.y, "up", "down"),
                );
                push_indented(&mut out, &op.pretty());
                out
            }
            Self::Colored { color, op } => {
                let mut out = format!("Color {{{} {} {} {}}}:", color.r, color.g, color.b, color.a);
                push_indented(&mut out, &op.pretty());
                out
            }
            Self::Mirrored(op) => {
                let mut out = String::from("Mirrored around Y axis:");
                push_indented(&mut out, &op.pretty());
                out
            }
            Self::Lifted(op) => {
                let mut out = String::from("WinOp from ImdOp:");
                push_indented(&mut out, &op.pretty());
                out
            }
        }
    }
}

impl core::fmt::Display for WinOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.pretty())
    }
}
