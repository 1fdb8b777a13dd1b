//! Vertical-edge pass: queries lying on a vertical polygon side.
//!
//! Vertical edges never enter the main sweep, so every x that carries both
//! queries and vertical edges gets a small 1D sweep along y over the closed
//! intervals `[min_y, max_y]`.

use std::collections::BTreeMap;

use super::types::{Classification, Event, EventKind};
use crate::geom::{cmp_coord, Coord, CoordKey, Edge, Point, Polygon};

/// Events for one x: OPEN/CLOSE per vertical edge, QUERY per query, sorted by
/// `y` with ties `Open < Query < Close`.
pub(crate) fn vertical_events<T: Coord>(
    edges: &[Edge<T>],
    query_ids: &[usize],
    queries: &[Point<T>],
) -> Vec<Event<T>> {
    let mut events = Vec::with_capacity(2 * edges.len() + query_ids.len());
    for e in edges {
        events.push(Event {
            owner: e.id,
            kind: EventKind::Open,
            at: e.min_y(),
        });
        events.push(Event {
            owner: e.id,
            kind: EventKind::Close,
            at: e.max_y(),
        });
    }
    for &q in query_ids {
        events.push(Event {
            owner: q,
            kind: EventKind::Query,
            at: queries[q].y(),
        });
    }
    events.sort_by(|a, b| {
        cmp_coord(a.at, b.at).then_with(|| a.kind.vertical_rank().cmp(&b.kind.vertical_rank()))
    });
    events
}

/// Mark every query covered by a vertical edge at its own x as BORDER.
pub(crate) fn answer_vertical<T: Coord>(
    polygon: &Polygon<T>,
    queries: &[Point<T>],
    by_x: &BTreeMap<CoordKey<T>, Vec<usize>>,
    answers: &mut [Classification],
) {
    let mut hits = 0usize;
    for (x, ids) in by_x {
        let edges = polygon.vertical_edges_at(x.0);
        if edges.is_empty() {
            continue;
        }
        let mut open = 0usize;
        for ev in vertical_events(edges, ids, queries) {
            match ev.kind {
                EventKind::Open => open += 1,
                EventKind::Close => open -= 1,
                EventKind::Query => {
                    if open > 0 {
                        answers[ev.owner].raise(Classification::Border);
                        hits += 1;
                    }
                }
            }
        }
    }
    tracing::debug!(columns = by_x.len(), hits, "vertical pass done");
}
