//! Agreement check between the sweep engine and the per-point reference on
//! random star-shaped polygons.
//!
//! Usage:
//!   cargo run -p polysweep --example star_sweep -- [instances]
//!
//! Prints, per instance, vertex/query counts, the class histogram, and the
//! number of disagreements (expected 0), followed by timings.

use std::time::Instant;

use polysweep::prelude::*;
use polysweep::naive;

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let star = StarCfg {
        vertex_count: VertexCount::Uniform { min: 50, max: 500 },
        ..StarCfg::default()
    };
    let queries = QueryCfg {
        count: 20_000,
        ..QueryCfg::default()
    };
    let mut tok = ReplayToken { seed: 2025, index: 0 };
    for i in 0..count {
        let inst = draw_instance(star, queries, tok);
        let poly = Polygon::from_coords(&inst.vertices).expect("star polygon is valid");
        let qs: Vec<Point<f64>> = inst
            .queries
            .iter()
            .enumerate()
            .map(|(k, &(x, y))| Point::new(x, y, k))
            .collect();

        let t0 = Instant::now();
        let fast = locate(&poly, &qs).expect("finite queries");
        let t_sweep = t0.elapsed().as_secs_f64() * 1e3;
        let t1 = Instant::now();
        let slow = naive::classify_all(&poly, &qs);
        let t_naive = t1.elapsed().as_secs_f64() * 1e3;

        let mut hist = [0usize; 3];
        for c in &fast {
            hist[*c as usize] += 1;
        }
        let mismatches = fast.iter().zip(&slow).filter(|(a, b)| a != b).count();
        println!(
            "instance {i}: N={}, Q={}, outside={} inside={} border={}, mismatches={mismatches}, sweep={t_sweep:.2}ms naive={t_naive:.2}ms",
            poly.len(),
            qs.len(),
            hist[0],
            hist[1],
            hist[2],
        );
        tok = tok.next();
    }
}
