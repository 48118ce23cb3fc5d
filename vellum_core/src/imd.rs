// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immediate-mode shape descriptions.
//!
//! An [`ImdOp`] describes a shape to draw in local coordinates, independent
//! of screen placement. Leaves carry geometry; `Sequence` and `Colored`
//! compose them. No constructor validates its inputs: a negative radius or
//! thickness is carried and rendered as given, with correctness left to the
//! caller.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::color::Rgba;
use crate::pretty::{Pretty, push_indented};

/// A shape-drawing description in local coordinates.
///
/// Values are immutable once constructed; every combinator allocates a new
/// node wrapping its inputs. A tree of `ImdOp`s enters screen space only
/// through [`WinOp::lift`](crate::win::WinOp::lift); the reverse embedding
/// does not exist.
#[derive(Clone, Debug, PartialEq)]
pub enum ImdOp {
    /// A circle outline of the given line thickness.
    Circle {
        /// Radius in local units.
        radius: f64,
        /// Center position.
        center: Vec2,
        /// Outline thickness.
        thickness: f64,
    },
    /// A straight line segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Line thickness.
        thickness: f64,
    },
    /// An axis-aligned rectangle spanned by two corners.
    ///
    /// A thickness of `0` means "filled" rather than outlined.
    Rectangle {
        /// One corner.
        from: Vec2,
        /// The opposite corner.
        to: Vec2,
        /// Outline thickness, or `0` for a filled rectangle.
        thickness: f64,
    },
    /// An ordered list of operations, rendered first to last.
    ///
    /// Order is significant and preserved exactly; a nested sequence stays
    /// nested rather than being flattened into its parent. An empty
    /// sequence is legal.
    Sequence(Vec<ImdOp>),
    /// A color annotation wrapping another operation.
    ///
    /// `Colored` nests freely; each layer renders independently and no
    /// merging of colors takes place.
    Colored {
        /// The annotating color.
        color: Rgba,
        /// The wrapped operation.
        op: Box<ImdOp>,
    },
}

impl ImdOp {
    /// Creates a circle description.
    #[inline]
    #[must_use]
    pub fn circle(radius: f64, center: Vec2, thickness: f64) -> Self {
        Self::Circle {
            radius,
            center,
            thickness,
        }
    }

    /// Creates a line description.
    #[inline]
    #[must_use]
    pub fn line(from: Vec2, to: Vec2, thickness: f64) -> Self {
        Self::Line {
            from,
            to,
            thickness,
        }
    }

    /// Creates a rectangle description. A `thickness` of `0` means filled.
    #[inline]
    #[must_use]
    pub fn rectangle(from: Vec2, to: Vec2, thickness: f64) -> Self {
        Self::Rectangle {
            from,
            to,
            thickness,
        }
    }

    /// Creates an ordered sequence from zero or more operations.
    #[must_use]
    pub fn sequence(ops: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(ops.into_iter().collect())
    }

    /// Wraps an operation with a color annotation.
    #[must_use]
    pub fn colored(color: Rgba, op: Self) -> Self {
        Self::Colored {
            color,
            op: Box::new(op),
        }
    }

    /// Returns a new sequence with `op` appended.
    ///
    /// Appends to the receiver when it is already a `Sequence`; any other
    /// receiver starts a fresh two-element sequence. The receiver is
    /// consumed, never mutated in place, so previously shared clones are
    /// unaffected.
    #[must_use]
    pub fn then(self, op: Self) -> Self {
        match self {
            Self::Sequence(mut ops) => {
                ops.push(op);
                Self::Sequence(ops)
            }
            other => Self::Sequence(vec![other, op]),
        }
    }
}

impl Pretty for ImdOp {
    fn pretty(&self) -> String {
        match self {
            Self::Circle {
                radius,
                center,
                thickness,
            } => format!(
                "Circle radius {radius} center Vec({}, {}) thickness {thickness}",
                center.x, center.y,
            ),
            Self::Line {
                from,
                to,
                thickness,
            } => format!(
                "Line from Vec({}, {}) to Vec({}, {}) thickness {thickness}",
                from.x, from.y, to.x, to.y,
            ),
            Self::Rectangle {
                from,
                to,
                thickness,
            } => {
                let mut out = format!(
                    "Rectangle from Vec({}, {}) to Vec({}, {})",
                    from.x, from.y, to.x, to.y,
                );
                if *thickness == 0.0 {
                    out.push_str(" (filled)");
                } else {
                    out.push_str(&format!(" thickness {thickness}"));
                }
                out
            }
            Self::Sequence(ops) => {
                let mut out = String::from("ImdOp Sequence:");
                for op in ops {
                    push_indented(&mut out, &op.pretty());
                }
                out
            }
            Self::Colored { color, op } => {
                let mut out = format!("Color {{{} {} {} {}}}:", color.r, color.g, color.b, color.a);
                push_indented(&mut out, &op.pretty());
                out
            }
        }
    }
}

impl core::fmt::Display for ImdOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.pretty())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn circle_renders_one_line() {
        let circle = ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0);
        assert_eq!(
            circle.pretty(),
            "Circle radius 25 center Vec(50, 100) thickness 2"
        );
        let small = ImdOp::circle(3.0, Vec2::new(1.0, 2.0), 4.0);
        assert_eq!(small.pretty(), "Circle radius 3 center Vec(1, 2) thickness 4");
    }

    #[test]
    fn line_renders_one_line() {
        let line = ImdOp::line(Vec2::new(50.0, 100.0), Vec2::new(101.0, 202.0), 2.0);
        assert_eq!(
            line.pretty(),
            "Line from Vec(50, 100) to Vec(101, 202) thickness 2"
        );
    }

    #[test]
    fn rectangle_zero_thickness_is_filled() {
        let filled = ImdOp::rectangle(Vec2::new(50.0, 100.0), Vec2::new(101.0, 202.0), 0.0);
        assert_eq!(
            filled.pretty(),
            "Rectangle from Vec(50, 100) to Vec(101, 202) (filled)"
        );
    }

    #[test]
    fn rectangle_nonzero_thickness_is_outlined() {
        let outlined = ImdOp::rectangle(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 5.0);
        assert_eq!(
            outlined.pretty(),
            "Rectangle from Vec(1, 2) to Vec(3, 4) thickness 5"
        );
        // Negative thickness is accepted and rendered as given.
        let negative = ImdOp::rectangle(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), -5.0);
        assert_eq!(
            negative.pretty(),
            "Rectangle from Vec(1, 2) to Vec(3, 4) thickness -5"
        );
    }

    #[test]
    fn colored_indents_its_child() {
        let green = Rgba::new(0.0, 1.0, 0.0, 0.0);
        let circle = ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0);
        assert_eq!(
            ImdOp::colored(green, circle).pretty(),
            "Color {0 1 0 0}:\n  Circle radius 25 center Vec(50, 100) thickness 2"
        );
    }

    #[test]
    fn sequence_preserves_insertion_order() {
        let circle = ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0);
        let small = ImdOp::circle(3.0, Vec2::new(1.0, 2.0), 4.0);
        assert_eq!(
            ImdOp::sequence([circle.clone(), small.clone()]).pretty(),
            "ImdOp Sequence:\n  \
             Circle radius 25 center Vec(50, 100) thickness 2\n  \
             Circle radius 3 center Vec(1, 2) thickness 4"
        );
        // Reversing the inputs reverses the rendering.
        assert_eq!(
            ImdOp::sequence([small, circle]).pretty(),
            "ImdOp Sequence:\n  \
             Circle radius 3 center Vec(1, 2) thickness 4\n  \
             Circle radius 25 center Vec(50, 100) thickness 2"
        );
    }

    #[test]
    fn empty_sequence_renders_header_only() {
        assert_eq!(ImdOp::sequence([]).pretty(), "ImdOp Sequence:");
    }

    #[test]
    fn nested_sequence_stays_nested() {
        let circle = ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0);
        let small = ImdOp::circle(3.0, Vec2::new(1.0, 2.0), 4.0);
        let nested = ImdOp::sequence([ImdOp::sequence([small, circle])]);
        assert_eq!(
            nested.pretty(),
            "ImdOp Sequence:\n  \
             ImdOp Sequence:\n    \
             Circle radius 3 center Vec(1, 2) thickness 4\n    \
             Circle radius 25 center Vec(50, 100) thickness 2"
        );
    }

    #[test]
    fn then_matches_direct_sequence_construction() {
        let circle = ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0);
        let small = ImdOp::circle(3.0, Vec2::new(1.0, 2.0), 4.0);
        let built = ImdOp::sequence([])
            .then(circle.clone())
            .then(small.clone());
        assert_eq!(built.pretty(), ImdOp::sequence([circle, small]).pretty());
    }

    #[test]
    fn then_leaves_prior_values_intact() {
        let base = ImdOp::sequence([ImdOp::circle(1.0, Vec2::new(0.0, 0.0), 1.0)]);
        let kept = base.clone();
        let extended = base.then(ImdOp::circle(2.0, Vec2::new(0.0, 0.0), 1.0));
        assert_ne!(kept, extended);
        assert_eq!(
            kept,
            ImdOp::sequence([ImdOp::circle(1.0, Vec2::new(0.0, 0.0), 1.0)])
        );
    }

    #[test]
    fn nested_colors_render_independently() {
        let inner = ImdOp::colored(
            Rgba::new(1.0, 1.0, 1.0, 0.0),
            ImdOp::circle(3.0, Vec2::new(1.0, 2.0), 4.0),
        );
        let outer = ImdOp::colored(Rgba::new(0.0, 1.0, 0.0, 0.0), inner);
        assert_eq!(
            outer.pretty(),
            "Color {0 1 0 0}:\n  \
             Color {1 1 1 0}:\n    \
             Circle radius 3 center Vec(1, 2) thickness 4"
        );
    }

    #[test]
    fn display_matches_pretty() {
        let circle = ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0);
        assert_eq!(format!("{circle}"), circle.pretty());
    }
}
