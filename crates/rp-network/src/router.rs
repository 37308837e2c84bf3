//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner calls routing via the [`Router`] trait, so an application can
//! swap in A* or a hop-count router without touching the rest of the
//! system.
//!
//! # Failure
//!
//! Routing fails softly.  Unknown endpoints and disconnected endpoints both
//! yield an empty [`Path`]; callers render that as "no route".

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rp_core::NodeId;
use tracing::debug;

use crate::graph::ProximityGraph;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: location names from start to end, and the
/// summed length of the hops between them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub stops:       Vec<String>,
    pub distance_km: f64,
}

impl Path {
    /// The "no route" path.
    pub fn none() -> Self {
        Self::default()
    }

    /// `true` when no route was found.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// `true` for the single-stop path of a start-equals-end query.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 1
    }

    pub fn start(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Consecutive `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stops.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.stops.join(" -> "))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to`.
    ///
    /// Returns an empty [`Path`] if either name is unknown to the graph or no
    /// chain of edges connects them.  `from == to` yields `[from]`.
    fn shortest_path(&self, graph: &ProximityGraph, from: &str, to: &str) -> Path;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm minimising summed edge distance.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, graph: &ProximityGraph, from: &str, to: &str) -> Path {
        let (Some(source), Some(target)) = (graph.node_id(from), graph.node_id(to)) else {
            debug!(from, to, "route endpoint unknown");
            return Path::none();
        };
        if source == target {
            return Path { stops: vec![from.to_owned()], distance_km: 0.0 };
        }
        let path = dijkstra(graph, source, target);
        if path.is_empty() {
            debug!(from, to, "no route");
        }
        path
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &ProximityGraph, source: NodeId, target: NodeId) -> Path {
    let n = graph.node_count();
    // dist[v] = best known distance to v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = predecessor on the best known path; INVALID for unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];

    dist[source.index()] = 0.0;

    // Min-heap: (cost, node). Secondary key NodeId makes tie-breaking deterministic.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
        if node == target {
            return reconstruct(graph, &prev, source, target, cost);
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let new_cost = cost + edge.distance_km;
            if new_cost < dist[edge.to.index()] {
                dist[edge.to.index()] = new_cost;
                prev[edge.to.index()] = node;
                heap.push(Reverse((OrderedFloat(new_cost), edge.to)));
            }
        }
    }

    Path::none()
}

fn reconstruct(
    graph: &ProximityGraph,
    prev: &[NodeId],
    source: NodeId,
    target: NodeId,
    distance_km: f64,
) -> Path {
    let mut stops = vec![graph.name(target).to_owned()];
    let mut cur = target;
    while cur != source {
        cur = prev[cur.index()];
        stops.push(graph.name(cur).to_owned());
    }
    stops.reverse();
    Path { stops, distance_km }
}
