//! Proximity graph and its builder.
//!
//! # Data layout
//!
//! Locations are numbered densely by `NodeId` in name order.  Outgoing edges
//! of node `n` live in `adjacency[n]`, ordered by neighbour name, so a
//! node's neighbours are a contiguous slice for the router's inner loop.
//!
//! A node whose slice is empty is isolated: no other location lies within
//! the radius.  It is still known to the graph, which is how the router
//! tells "unknown place" and "unreachable place" apart.
//!
//! # Rebuilds
//!
//! The graph is a disposable snapshot of a [`LocationStore`].  Any change to
//! the store is followed by a full [`ProximityGraphBuilder::build`]; there
//! is no incremental update.

use rp_core::{NodeId, distance_km};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::store::{Location, LocationStore};

/// Locations strictly closer than this are directly connected.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed hop to a neighbour within the radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:          NodeId,
    pub distance_km: f64,
}

// ── ProximityGraph ────────────────────────────────────────────────────────────

/// Directed adjacency over a location snapshot.
///
/// Do not construct directly; use [`ProximityGraphBuilder`].
#[derive(Clone, Debug, Default)]
pub struct ProximityGraph {
    names:     Vec<String>,
    index:     FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    radius_km: f64,
}

impl ProximityGraph {
    /// A graph with no locations.  Every route query against it is empty.
    pub fn empty() -> Self {
        Self { radius_km: DEFAULT_RADIUS_KM, ..Self::default() }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Locations with at least one neighbour.
    pub fn connected_count(&self) -> usize {
        self.adjacency.iter().filter(|edges| !edges.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node.index()]
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing edges of `node`, ordered by neighbour name.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> &[Edge] {
        &self.adjacency[node.index()]
    }

    /// `(neighbour name, distance)` pairs for the location called `name`.
    ///
    /// Empty for isolated and unknown locations alike.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.node_id(name)
            .map(|n| self.out_edges(n))
            .unwrap_or(&[])
            .iter()
            .map(|e| (self.name(e.to), e.distance_km))
    }

    /// Distance of the direct edge `from → to`, if there is one.
    pub fn edge_distance(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        self.out_edges(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.distance_km)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_distance(from, to).is_some()
    }
}

// ── ProximityGraphBuilder ─────────────────────────────────────────────────────

/// Builds a [`ProximityGraph`] from a set of locations.
///
/// Every ordered pair of distinct locations is measured with the haversine
/// distance, which makes the result symmetric.  Cost is quadratic in the
/// number of locations.
///
/// # Example
///
/// ```
/// use rp_network::{LocationStore, ProximityGraphBuilder};
///
/// let mut store = LocationStore::new();
/// store.add("A", 23.700, 90.400).unwrap();
/// store.add("B", 23.720, 90.410).unwrap();
/// let graph = ProximityGraphBuilder::new().build_from_store(&store);
/// assert!(graph.has_edge("A", "B"));
/// assert!(graph.has_edge("B", "A"));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ProximityGraphBuilder {
    radius_km: f64,
}

impl Default for ProximityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximityGraphBuilder {
    pub fn new() -> Self {
        Self { radius_km: DEFAULT_RADIUS_KM }
    }

    pub fn with_radius(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn build_from_store(&self, store: &LocationStore) -> ProximityGraph {
        self.build(store.all())
    }

    /// Consume a location snapshot and produce a fresh graph.
    ///
    /// Locations are renumbered in name order; a repeated name keeps its
    /// last occurrence.
    pub fn build<'a, I>(&self, locations: I) -> ProximityGraph
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let mut nodes: Vec<&Location> = locations.into_iter().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes.reverse();
        nodes.dedup_by(|later, earlier| later.name == earlier.name);
        nodes.reverse();

        let names: Vec<String> = nodes.iter().map(|l| l.name.clone()).collect();
        let index: FxHashMap<String, NodeId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), NodeId(i as u32)))
            .collect();

        let adjacency: Vec<Vec<Edge>> = nodes
            .iter()
            .enumerate()
            .map(|(i, a)| {
                nodes
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .filter_map(|(j, b)| {
                        let d = distance_km(a.lat(), a.lon(), b.lat(), b.lon());
                        (d < self.radius_km).then_some(Edge { to: NodeId(j as u32), distance_km: d })
                    })
                    .collect()
            })
            .collect();

        let graph = ProximityGraph { names, index, adjacency, radius_km: self.radius_km };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            connected = graph.connected_count(),
            radius_km = self.radius_km,
            "proximity graph rebuilt"
        );
        graph
    }
}
