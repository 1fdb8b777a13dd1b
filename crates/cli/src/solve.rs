//! Per-test-case classification and run summary.

use clap::ValueEnum;
use polysweep::{
    locate_coords, naive, Classification, CoordRole, GeometryError, Point, Polygon,
};
use serde::Serialize;

use crate::input::TestCase;

/// Classifier used for every test case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algo {
    /// Plane sweep over all queries at once.
    Sweep,
    /// Independent ray casting per query.
    Naive,
}

#[derive(Debug)]
pub struct CaseResult {
    /// 1-based position in the input stream.
    pub case: usize,
    pub outcome: Result<Vec<Classification>, GeometryError>,
}

pub fn solve_case(case: usize, tc: &TestCase, algo: Algo) -> CaseResult {
    let outcome = classify(tc, algo);
    if let Err(err) = &outcome {
        tracing::warn!(case, %err, "skipping malformed test case");
    }
    CaseResult { case, outcome }
}

pub fn solve_all(cases: &[TestCase], algo: Algo) -> Vec<CaseResult> {
    cases
        .iter()
        .enumerate()
        .map(|(i, tc)| solve_case(i + 1, tc, algo))
        .collect()
}

fn classify(tc: &TestCase, algo: Algo) -> Result<Vec<Classification>, GeometryError> {
    match algo {
        Algo::Sweep => locate_coords(&tc.vertices, &tc.queries),
        Algo::Naive => {
            let poly = Polygon::from_coords(&tc.vertices)?;
            let mut queries = Vec::with_capacity(tc.queries.len());
            for (i, &(x, y)) in tc.queries.iter().enumerate() {
                let q = Point::new(x, y, i);
                if !q.is_finite() {
                    return Err(GeometryError::NonFinite {
                        role: CoordRole::Query,
                        index: i,
                    });
                }
                queries.push(q);
            }
            Ok(naive::classify_all(&poly, &queries))
        }
    }
}

/// Counts over a whole run (written to the provenance sidecar).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cases: usize,
    pub malformed: usize,
    pub queries: usize,
    pub inside: usize,
    pub outside: usize,
    pub border: usize,
}

impl Summary {
    pub fn from_results(results: &[CaseResult]) -> Self {
        let mut s = Summary {
            cases: results.len(),
            ..Summary::default()
        };
        for r in results {
            match &r.outcome {
                Ok(classes) => {
                    s.queries += classes.len();
                    for c in classes {
                        match c {
                            Classification::Inside => s.inside += 1,
                            Classification::Outside => s.outside += 1,
                            Classification::Border => s.border += 1,
                        }
                    }
                }
                Err(_) => s.malformed += 1,
            }
        }
        s
    }
}
