//! Batched point-in-polygon location by plane sweep.
//!
//! Given one simple polygon and many query points, classify every query as
//! INSIDE, OUTSIDE or BORDER in O((N + Q) log(N + Q)) total, instead of O(N)
//! per query.
//!
//! Layout
//! - `geom`: points, edges, the normalized `Polygon`, random instances.
//! - `locate`: the query engine (vertical-edge pass + general sweep).
//! - `naive`: per-point reference classifier used as a test oracle.

mod error;
pub mod geom;
pub mod locate;
pub mod naive;

pub use error::{CoordRole, GeometryError};
pub use geom::{Coord, Direction, Edge, Point, Polygon};
pub use locate::{locate, locate_coords, Classification, QueryEngine};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{
        draw_instance, draw_queries, draw_star_polygon, Instance, QueryCfg, ReplayToken, StarCfg,
        VertexCount,
    };
    pub use crate::geom::{Coord, Direction, Edge, Point, Polygon};
    pub use crate::locate::{locate, locate_coords, Classification, QueryEngine};
    pub use crate::{CoordRole, GeometryError};
}
