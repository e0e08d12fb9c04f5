//! Street network representation and builder.
//!
//! # Data layout
//!
//! The network is an adjacency index keyed by coordinate: each coordinate
//! maps to the list of street segments departing from it.  Every physical
//! road contributes two directed segments (forward and reverse, same name),
//! so the network is symmetric by construction: if `(A→B, name)` is present
//! under `A`, then `(B→A, name)` is present under `B`.
//!
//! Built once via [`StreetNetworkBuilder`], then treated as immutable — safe
//! to share read-only across concurrent route queries.

use courier_core::{GeoCoord, StreetSegment};

use crate::index::BucketIndex;

// ── StreetNetwork ─────────────────────────────────────────────────────────────

/// Read-only road network keyed by coordinate.
///
/// Do not construct directly; use [`StreetNetworkBuilder`].
#[derive(Debug)]
pub struct StreetNetwork {
    index: BucketIndex<GeoCoord, Vec<StreetSegment>>,
    segment_count: usize,
}

impl StreetNetwork {
    /// An empty network with no streets.
    ///
    /// Any routing request against an empty network fails, since neither
    /// endpoint appears in it.
    pub fn empty() -> Self {
        StreetNetworkBuilder::new().build()
    }

    /// All segments departing `coord`, or `None` if the coordinate never
    /// appears as a segment endpoint in the loaded network.
    pub fn segments_from(&self, coord: &GeoCoord) -> Option<&[StreetSegment]> {
        self.index.get(coord).map(Vec::as_slice)
    }

    /// Number of distinct coordinates appearing as segment endpoints.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of directed segments (twice the physical road count).
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ── StreetNetworkBuilder ──────────────────────────────────────────────────────

/// Construct a [`StreetNetwork`] incrementally, then call
/// [`build`](Self::build).
pub struct StreetNetworkBuilder {
    index: BucketIndex<GeoCoord, Vec<StreetSegment>>,
    segment_count: usize,
}

impl StreetNetworkBuilder {
    pub fn new() -> Self {
        Self {
            index: BucketIndex::new(),
            segment_count: 0,
        }
    }

    /// Add one physical road segment of street `name` between `start` and
    /// `end`.  Inserts the forward segment under `start` and the reversed
    /// segment under `end`.
    pub fn add_street_segment(&mut self, name: &str, start: GeoCoord, end: GeoCoord) {
        let forward = StreetSegment::new(start.clone(), end.clone(), name);
        let reverse = forward.reversed();
        self.insert(start, forward);
        self.insert(end, reverse);
        self.segment_count += 2;
    }

    fn insert(&mut self, key: GeoCoord, segment: StreetSegment) {
        match self.index.get_mut(&key) {
            Some(list) => list.push(segment),
            None => self.index.put(key, vec![segment]),
        }
    }

    /// Consume the builder and produce a [`StreetNetwork`].
    pub fn build(self) -> StreetNetwork {
        StreetNetwork {
            index: self.index,
            segment_count: self.segment_count,
        }
    }
}

impl Default for StreetNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
