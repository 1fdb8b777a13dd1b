//! Classification results and transient sweep events.

use std::fmt;

/// Location of a query relative to the polygon.
///
/// Ordered `Outside < Inside < Border`; a stored result is only ever raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    #[default]
    Outside,
    Inside,
    Border,
}

impl Classification {
    /// Output token (`INSIDE`, `OUTSIDE`, `BORDER`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Outside => "OUTSIDE",
            Classification::Inside => "INSIDE",
            Classification::Border => "BORDER",
        }
    }

    /// Keep the stronger of the stored and the new result.
    #[inline]
    pub fn raise(&mut self, to: Classification) {
        if to > *self {
            *self = to;
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EventKind {
    Open,
    Close,
    Query,
}

impl EventKind {
    /// Tie order along the vertical-edge sweep (y axis): intervals are closed,
    /// so an endpoint query must see its interval open.
    #[inline]
    pub(crate) fn vertical_rank(self) -> u8 {
        match self {
            EventKind::Open => 0,
            EventKind::Query => 1,
            EventKind::Close => 2,
        }
    }

    /// Tie order along the main sweep (x axis): edges ending at the query's x
    /// are still active, edges starting there are not yet.
    #[inline]
    pub(crate) fn sweep_rank(self) -> u8 {
        match self {
            EventKind::Query => 0,
            EventKind::Close => 1,
            EventKind::Open => 2,
        }
    }
}

/// Sweep event at coordinate `at` along the pass's sweep axis.
///
/// `owner` is an edge index for `Open`/`Close` and a query index for `Query`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Event<T> {
    pub owner: usize,
    pub kind: EventKind,
    pub at: T,
}
