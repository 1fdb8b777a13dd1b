//! General sweep pass over the non-vertical edges.
//!
//! A vertical line moves left to right through OPEN (edge min-x end), CLOSE
//! (edge max-x end) and QUERY events. At a query the active edges are exactly
//! those spanning the query's x; the edge directly below the query decides
//! inside/outside, the edge at or directly above it decides BORDER.
//!
//! Inside rule: after normalization the boundary runs clockwise, so the
//! interior lies above every `FallingX` edge and below every `RisingX` edge.

use super::active::ActiveEdges;
use super::types::{Classification, Event, EventKind};
use crate::geom::{cmp_coord, Coord, Direction, Edge, Point, Polygon};

/// All events sorted by x with ties `Query < Close < Open`.
pub(crate) fn sweep_events<T: Coord>(edges: &[Edge<T>], queries: &[Point<T>]) -> Vec<Event<T>> {
    let mut events = Vec::with_capacity(2 * edges.len() + queries.len());
    for e in edges.iter().filter(|e| !e.is_vertical()) {
        events.push(Event {
            owner: e.id,
            kind: EventKind::Open,
            at: e.min_x(),
        });
        events.push(Event {
            owner: e.id,
            kind: EventKind::Close,
            at: e.max_x(),
        });
    }
    for (i, q) in queries.iter().enumerate() {
        events.push(Event {
            owner: i,
            kind: EventKind::Query,
            at: q.x(),
        });
    }
    events.sort_by(|a, b| {
        cmp_coord(a.at, b.at).then_with(|| a.kind.sweep_rank().cmp(&b.kind.sweep_rank()))
    });
    events
}

pub(crate) fn answer_sweep<T: Coord>(
    polygon: &Polygon<T>,
    queries: &[Point<T>],
    answers: &mut [Classification],
) {
    let edges = polygon.edges();
    let events = sweep_events(edges, queries);
    let mut active = ActiveEdges::with_capacity(edges.len());
    let mut peak = 0usize;
    for ev in &events {
        match ev.kind {
            EventKind::Open => {
                active.insert(edges[ev.owner]);
                peak = peak.max(active.len());
            }
            EventKind::Close => {
                if !active.remove(&edges[ev.owner]) {
                    tracing::warn!(edge = ev.owner, "closing edge was not active");
                }
            }
            EventKind::Query => {
                let raised = classify_against(&active, &queries[ev.owner]);
                answers[ev.owner].raise(raised);
            }
        }
    }
    tracing::debug!(events = events.len(), peak_active = peak, "sweep pass done");
}

/// Result for one query given the edges currently crossing its x.
fn classify_against<T: Coord>(active: &ActiveEdges<T>, q: &Point<T>) -> Classification {
    if active.is_empty() {
        return Classification::Outside;
    }
    let at = active.lower_bound(&Edge::probe(*q));
    if let Some(e) = active.get(at) {
        if e.y_at(q.x()) == q.y() {
            return Classification::Border;
        }
    }
    match at.checked_sub(1).and_then(|i| active.get(i)) {
        Some(below) if below.direction == Direction::FallingX => Classification::Inside,
        _ => Classification::Outside,
    }
}
