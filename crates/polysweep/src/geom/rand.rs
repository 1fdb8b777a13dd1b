//! Random star-shaped polygons and query sets (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic instances for property tests, benches, and the CLI
//!   `generate` subcommand.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the vertices in angle order. The result is
//!   star-shaped around the origin and therefore simple; with zero radial
//!   jitter all vertices lie on one circle and the polygon is convex.
//! - Queries are uniform in the vertex bounding box (enlarged by a margin); a
//!   fraction is snapped onto vertices to exercise border hits.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so every radius stays positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}
impl StarCfg {
    /// Vertices on a circle: a convex polygon with `n` corners.
    pub fn convex(n: usize) -> Self {
        Self {
            vertex_count: VertexCount::Fixed(n),
            radial_jitter: 0.0,
            ..Self::default()
        }
    }
}

/// Query sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct QueryCfg {
    pub count: usize,
    /// Probability that a query is placed exactly on a random vertex.
    pub vertex_snap_frac: f64,
    /// Bounding-box enlargement relative to its larger side.
    pub margin: f64,
}
impl Default for QueryCfg {
    fn default() -> Self {
        Self {
            count: 64,
            vertex_snap_frac: 0.1,
            margin: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// One polygon plus its queries, as raw coordinates.
#[derive(Clone, Debug)]
pub struct Instance {
    pub vertices: Vec<(f64, f64)>,
    pub queries: Vec<(f64, f64)>,
}

/// Draw a random star-shaped polygon (vertices in counter-clockwise angle order).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<(f64, f64)> {
    star_polygon_with(&mut tok.to_std_rng(), cfg)
}

/// Draw queries around `vertices` (see `QueryCfg`).
pub fn draw_queries(vertices: &[(f64, f64)], cfg: QueryCfg, tok: ReplayToken) -> Vec<(f64, f64)> {
    queries_with(&mut tok.to_std_rng(), vertices, cfg)
}

/// Polygon and queries from a single RNG stream.
pub fn draw_instance(star: StarCfg, query: QueryCfg, tok: ReplayToken) -> Instance {
    let mut rng = tok.to_std_rng();
    let vertices = star_polygon_with(&mut rng, star);
    let queries = queries_with(&mut rng, &vertices, query);
    Instance { vertices, queries }
}

fn star_polygon_with<R: Rng>(rng: &mut R, cfg: StarCfg) -> Vec<(f64, f64)> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles
        .into_iter()
        .map(|th| {
            let u = if rj > 0.0 {
                (rng.gen::<f64>() * 2.0 - 1.0) * rj
            } else {
                0.0
            };
            let r = (1.0 + u) * r0;
            (th.cos() * r, th.sin() * r)
        })
        .collect()
}

fn queries_with<R: Rng>(rng: &mut R, vertices: &[(f64, f64)], cfg: QueryCfg) -> Vec<(f64, f64)> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let (mut lo_x, mut lo_y) = (f64::INFINITY, f64::INFINITY);
    let (mut hi_x, mut hi_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in vertices {
        lo_x = lo_x.min(x);
        lo_y = lo_y.min(y);
        hi_x = hi_x.max(x);
        hi_y = hi_y.max(y);
    }
    let pad = (hi_x - lo_x).max(hi_y - lo_y) * cfg.margin.max(0.0);
    let snap = cfg.vertex_snap_frac.clamp(0.0, 1.0);
    (0..cfg.count)
        .map(|_| {
            if snap > 0.0 && rng.gen_bool(snap) {
                vertices[rng.gen_range(0..vertices.len())]
            } else {
                (
                    rng.gen_range((lo_x - pad)..=(hi_x + pad)),
                    rng.gen_range((lo_y - pad)..=(hi_y + pad)),
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point, Polygon};

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 20 },
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_instance(cfg, QueryCfg::default(), tok);
        let b = draw_instance(cfg, QueryCfg::default(), tok);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.queries, b.queries);
        let c = draw_instance(cfg, QueryCfg::default(), tok.next());
        assert_ne!(a.vertices, c.vertices);
    }

    #[test]
    fn star_polygons_are_valid_polygons() {
        let mut tok = ReplayToken { seed: 3, index: 0 };
        for _ in 0..50 {
            let coords = draw_star_polygon(StarCfg::default(), tok);
            let poly = Polygon::from_coords(&coords).expect("valid polygon");
            assert_eq!(poly.len(), 12);
            assert!(poly.area() > 0.0);
            tok = tok.next();
        }
    }

    #[test]
    fn convex_cfg_turns_one_way() {
        let coords = draw_star_polygon(StarCfg::convex(9), ReplayToken { seed: 1, index: 1 });
        let pts: Vec<Point<f64>> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(x, y, i))
            .collect();
        let n = pts.len();
        for i in 0..n {
            let (a, b, c) = (pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
            let turn = (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x());
            assert!(turn > 0.0, "corner {i} is not a left turn");
        }
    }

    #[test]
    fn snapped_queries_hit_vertices() {
        let inst = draw_instance(
            StarCfg::default(),
            QueryCfg {
                count: 200,
                vertex_snap_frac: 1.0,
                margin: 0.0,
            },
            ReplayToken { seed: 9, index: 0 },
        );
        assert_eq!(inst.queries.len(), 200);
        assert!(inst.queries.iter().all(|q| inst.vertices.contains(q)));
    }
}
