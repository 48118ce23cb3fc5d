// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative draw-op algebras with canonical pretty-printing.
//!
//! `vellum_core` describes 2D drawing intent without touching a graphics
//! device. Instead of issuing draw calls, callers build an immutable tree
//! of operation values and hand the tree to a rendering backend (out of
//! scope for this crate), or ask it for its canonical textual form. The
//! crate is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! Three closed algebras share one serialization protocol:
//!
//! ```text
//!   ImdOp ──────────── shapes in local coordinates
//!     │                (circle / line / rectangle, sequenced, recolored)
//!     │ WinOp::lift
//!     ▼
//!   WinOp ──────────── screen-space composition
//!                      (tile layers, images, moved / colored / mirrored)
//!
//!   TextOp ─────────── literal text lines
//!
//!   Pretty ─────────── canonical indented rendering of any of the above
//! ```
//!
//! **[`imd`]** — Immediate-mode shape descriptions ([`ImdOp`](imd::ImdOp)).
//! Leaves carry their geometry; `Sequence` and `Colored` compose them.
//!
//! **[`win`]** — Window-level descriptions ([`WinOp`](win::WinOp)):
//! references to externally managed tile layers and images, plus
//! translation, recoloring, mirroring, and the one-way lift that embeds an
//! `ImdOp` for rendering in screen space.
//!
//! **[`text`]** — A block of literal text lines ([`TextOp`](text::TextOp)).
//!
//! **[`pretty`]** — The [`Pretty`](pretty::Pretty) trait: every operation
//! renders to a deterministic, indentation-based multi-line string, used
//! for display and test assertions (write-only; there is no parser).
//!
//! **[`color`]** — Pass-through RGBA channel storage ([`Rgba`](color::Rgba)).
//!
//! **[`asset`]** — Opaque handles to externally loaded assets
//! ([`TilesetId`](asset::TilesetId), [`ImageId`](asset::ImageId)).
//!
//! Every value is immutable once constructed; combinators allocate new
//! nodes rather than mutating inputs, so trees may be freely shared across
//! threads. Construction and serialization are total: no constructor
//! validates its inputs and none can fail.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod asset;
pub mod color;
pub mod imd;
pub mod pretty;
pub mod text;
pub mod win;
