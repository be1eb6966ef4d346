// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small canvas, then walk through the queries an editor issues for
//! "bring forward / send backward" style commands.
//!
//! Run with: `cargo run -p strata_demos --example stacking`

use kurbo::Rect;
use strata_canvas::{Canvas, ShapeId};
use strata_zorder::{object_above, object_below, sort_descending, z_index, z_indices};

fn describe(canvas: &Canvas, names: &[(ShapeId, &str)]) {
    let name = |id: ShapeId| {
        names
            .iter()
            .find(|&&(n, _)| n == id)
            .map(|&(_, s)| s)
            .unwrap_or("?")
    };
    for &(id, label) in names {
        let z = z_index(canvas, id).expect("shape is on the canvas");
        let above = object_above(canvas, id, &[]).map(|o| name(o));
        let below = object_below(canvas, id, &[]).map(|o| name(o));
        println!(
            "  {label:<10} z={z}  above={}  below={}",
            above.unwrap_or("-"),
            below.unwrap_or("-"),
        );
    }
}

fn main() {
    let mut canvas = Canvas::new();

    // A background sheet, two overlapping cards on it, and a sticker off to
    // the side that touches nothing.
    let sheet = canvas.insert(Rect::new(0.0, 0.0, 300.0, 200.0));
    let card_a = canvas.insert(Rect::new(20.0, 20.0, 140.0, 120.0));
    let card_b = canvas.insert(Rect::new(100.0, 60.0, 220.0, 160.0));
    let sticker = canvas.insert(Rect::new(400.0, 0.0, 430.0, 30.0));

    let names = [
        (sheet, "sheet"),
        (card_a, "card A"),
        (card_b, "card B"),
        (sticker, "sticker"),
    ];

    println!("initial stack (bottom to top):");
    describe(&canvas, &names);

    // "Bring forward" on card A: it hops over card B.
    canvas.raise(card_a);
    println!("\nafter raising card A:");
    describe(&canvas, &names);

    // Hit-testing considers candidates top-first.
    let hits = sort_descending(&canvas, &[sheet, card_a, card_b]);
    println!("\nhit-test order over the cards and sheet:");
    for id in hits {
        println!("  {}", names.iter().find(|&&(n, _)| n == id).unwrap().1);
    }

    // Batched ranks for a selection, one pass over the canvas.
    let selection = [card_a, sticker];
    println!("\nselection ranks:");
    for (id, z) in z_indices(&canvas, &selection) {
        println!("  {} -> z={z}", names.iter().find(|&&(n, _)| n == id).unwrap().1);
    }
}
