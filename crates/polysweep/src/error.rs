use std::fmt;

/// Which input list a rejected coordinate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordRole {
    Vertex,
    Query,
}

impl fmt::Display for CoordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordRole::Vertex => write!(f, "vertex"),
            CoordRole::Query => write!(f, "query"),
        }
    }
}

/// Malformed input reported by polygon construction and query ingestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    TooFewVertices { count: usize },
    ZeroArea,
    NonFinite { role: CoordRole, index: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            GeometryError::ZeroArea => write!(f, "polygon encloses zero area"),
            GeometryError::NonFinite { role, index } => {
                write!(f, "{role} {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
