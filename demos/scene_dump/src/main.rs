// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a game-screen-like operation tree and prints its canonical form.
//!
//! The scene stacks a tile layer, two recolored sprites, and a lifted
//! immediate-mode overlay, then dumps the whole composition followed by a
//! small HUD text block.

use kurbo::Vec2;

use vellum_core::color::Rgba;
use vellum_core::imd::ImdOp;
use vellum_core::pretty::Pretty;
use vellum_core::text::TextOp;
use vellum_core::win::WinOp;

fn main() {
    // -- immediate-mode overlay --------------------------------------------
    let overlay = ImdOp::sequence([])
        .then(ImdOp::circle(25.0, Vec2::new(50.0, 100.0), 2.0))
        .then(ImdOp::line(Vec2::new(0.0, 0.0), Vec2::new(100.0, 200.0), 1.0))
        .then(ImdOp::colored(
            Rgba::new(0.0, 1.0, 0.0, 0.0),
            ImdOp::rectangle(Vec2::new(10.0, 10.0), Vec2::new(90.0, 190.0), 0.0),
        ));

    // -- screen composition ------------------------------------------------
    let map = WinOp::colored(
        Rgba::new(255.0, 0.0, 0.0, 255.0),
        WinOp::image(None, "IMap"),
    );
    let ghost = WinOp::moved(
        Vec2::new(55.0, -88.5),
        WinOp::colored(
            Rgba::new(255.0, 255.0, 0.0, 255.0),
            WinOp::image(None, "IGhost"),
        ),
    );
    let scene = WinOp::sequence([
        WinOp::tile_layer(None, "Background"),
        WinOp::mirrored(map),
        ghost,
        WinOp::lift(overlay),
    ]);

    println!("{}", scene.pretty());
    println!();
    println!("{}", TextOp::new(["Score: 0", "Lives: 3"]).pretty());
}
