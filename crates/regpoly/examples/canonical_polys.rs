//! Print the canonical unit polygons and a few seeded placements.
//!
//! Usage:
//!   cargo run -p regpoly --example canonical_polys

use regpoly::prelude::*;

fn main() {
    println!("{}", Triangle::<f64>::default());
    println!("{}", Hexagon::<f64>::default());
    println!("{}", Octagon::<f64>::default());

    let batch: FigureArray<Hexagon> =
        match draw_batch(PlacementCfg::default(), ReplayToken::new(2025, 0), 3) {
            Ok(v) => v.into_iter().collect(),
            Err(e) => {
                eprintln!("sampling failed: {e}");
                return;
            }
        };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = batch.print_areas(&mut out) {
        eprintln!("write failed: {e}");
    }
    println!("total area: {}", batch.total_area());
}
