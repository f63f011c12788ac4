//! Graph traversal algorithms driven by the priority queue
//!
//! Prim's minimum spanning tree and Dijkstra's single-source shortest paths,
//! both generic over the [`Graph`] capability. Each algorithm reads the
//! input graph through vertex/edge iteration only and accumulates results in
//! freshly constructed state, so callers may mutate the graph between
//! invocations.
//!
//! # Lazy priority updates
//!
//! Neither algorithm uses decrease-key. A vertex whose tentative priority
//! improves is simply pushed again; the stale entry stays queued and is
//! ignored when it surfaces, because the vertex is already finalized by
//! then. Prim's "finalized" check is membership in the output graph,
//! Dijkstra's is its visited map.
//!
//! # Example
//!
//! ```rust
//! use heapgraph::algorithms::{shortest_paths, Distance, ShortestPathAlgorithm};
//! use heapgraph::graph::AdjacencyList;
//!
//! let mut graph: AdjacencyList<i64> = AdjacencyList::with_vertices(["V1", "V2", "V3"]);
//! graph.add_undirected("V2", "V3", 10);
//! graph.add_undirected("V1", "V2", 11);
//!
//! let paths = shortest_paths(&graph, ShortestPathAlgorithm::Dijkstra, &"V1".into()).unwrap();
//! assert_eq!(paths.distance_to(&"V3".into()).unwrap(), Distance::Finite(21));
//! ```

use std::fmt;
use std::hash::Hash;
use std::ops::Add;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};
use crate::queue::PriorityQueue;

/// Minimum-spanning-tree algorithm selector
///
/// Kruskal's algorithm is documented alongside Prim's but has no
/// implementation; selecting it fails with [`Error::Unimplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstAlgorithm {
    /// Prim's algorithm
    Prim,
    /// Not implemented
    Kruskal,
}

/// Shortest-path algorithm selector
///
/// Bellman-Ford is documented alongside Dijkstra but has no implementation;
/// selecting it fails with [`Error::Unimplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortestPathAlgorithm {
    /// Dijkstra's algorithm
    Dijkstra,
    /// Not implemented
    BellmanFord,
}

/// A path distance with an explicit unreachable state
///
/// `Unreachable` compares greater than every finite distance, so tentative
/// distances order correctly in the priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance<W> {
    /// A reachable vertex at this total path weight
    Finite(W),
    /// No path known
    Unreachable,
}

impl<W> Distance<W> {
    /// The finite weight, or `None` for `Unreachable`.
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// Returns true for `Unreachable`.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }
}

impl<W: Weight> Add<W> for Distance<W> {
    type Output = Distance<W>;

    fn add(self, rhs: W) -> Distance<W> {
        match self {
            Distance::Finite(w) => Distance::Finite(w + rhs),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{w}"),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

/// Result of a single-source shortest-path computation
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Eq + Hash, W> {
    /// Total path weight from the source to each vertex
    pub dist: FxHashMap<V, Distance<W>>,
    /// Previous vertex on the best known path; `None` for the source and
    /// for unreachable vertices
    pub pred: FxHashMap<V, Option<V>>,
}

impl<V: Eq + Hash + fmt::Display, W: Copy> ShortestPaths<V, W> {
    /// Distance from the source to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `target` was not a vertex of the
    /// graph the computation ran on.
    pub fn distance_to(&self, target: &V) -> Result<Distance<W>> {
        self.dist
            .get(target)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(target.to_string()))
    }

    /// Predecessor of `v` on the best known path from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `v` was not a vertex of the
    /// graph the computation ran on.
    pub fn predecessor(&self, v: &V) -> Result<Option<&V>> {
        self.pred
            .get(v)
            .map(|p| p.as_ref())
            .ok_or_else(|| Error::UnknownVertex(v.to_string()))
    }
}

/// Computes a minimum spanning tree of `graph` with the selected algorithm.
///
/// The result is a new graph of the same implementation. Its vertex set is
/// the connected component reachable from the first vertex in `vertices()`
/// order, and its edges (stored in both directions, as in the input
/// convention for undirected graphs) form a spanning tree of minimum total
/// weight.
///
/// The concept of a minimum spanning tree is valid only for connected,
/// undirected graphs with symmetric edge weights; results on other inputs
/// are unspecified. On a disconnected graph the returned tree spans one
/// component, which callers can exploit to peel off components one at a
/// time.
///
/// # Errors
///
/// Returns [`Error::Unimplemented`] for [`MstAlgorithm::Kruskal`].
///
/// # Example
///
/// ```rust
/// use heapgraph::algorithms::{minimum_spanning_tree, MstAlgorithm};
/// use heapgraph::graph::AdjacencyList;
///
/// let mut graph: AdjacencyList<i64> = AdjacencyList::new();
/// graph.add_undirected("u", "v", 3);
///
/// let mst = minimum_spanning_tree(&graph, MstAlgorithm::Prim).unwrap();
/// assert_eq!(mst.total_edge_weight(), 6); // edge stored in both directions
/// ```
pub fn minimum_spanning_tree<G: Graph>(graph: &G, algorithm: MstAlgorithm) -> Result<G> {
    match algorithm {
        MstAlgorithm::Prim => Ok(prim(graph)),
        MstAlgorithm::Kruskal => Err(Error::Unimplemented("kruskal minimum spanning tree")),
    }
}

/// Prim's algorithm with lazy priority updates.
///
/// A vertex is finalized the moment it is added to the output graph; any
/// later pop of the same vertex is a stale duplicate and is skipped.
fn prim<G: Graph>(graph: &G) -> G {
    let mut mst = graph.empty_like();
    let mut queue: PriorityQueue<G::VertexId, G::Weight> = PriorityQueue::new();
    let mut best_edge: FxHashMap<G::VertexId, (G::VertexId, G::Weight)> = FxHashMap::default();

    let Some(start) = graph.vertices().into_iter().next() else {
        return mst;
    };
    queue.push(start, G::Weight::default());

    while let Ok(v) = queue.pop() {
        if mst.contains_vertex(&v) {
            continue;
        }
        mst.add_vertex(v.clone());
        if let Some((source, weight)) = best_edge.remove(&v) {
            mst.add_edge(source.clone(), v.clone(), weight);
            mst.add_edge(v.clone(), source, weight);
        }
        for w in graph.neighbors(&v) {
            let Some(vw) = graph.edge_weight(&v, &w) else {
                continue;
            };
            queue.push(w.clone(), vw);
            let improves = match best_edge.get(&w) {
                Some((_, best)) => vw < *best,
                None => true,
            };
            if improves {
                best_edge.insert(w, (v.clone(), vw));
            }
        }
    }
    mst
}

/// Computes single-source shortest paths with the selected algorithm.
///
/// Returns distances and predecessors for every vertex of the graph. Use
/// [`ShortestPaths::distance_to`] to query a specific target.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `source` is not a vertex of the
/// graph, and [`Error::Unimplemented`] for
/// [`ShortestPathAlgorithm::BellmanFord`].
pub fn shortest_paths<G: Graph>(
    graph: &G,
    algorithm: ShortestPathAlgorithm,
    source: &G::VertexId,
) -> Result<ShortestPaths<G::VertexId, G::Weight>> {
    match algorithm {
        ShortestPathAlgorithm::Dijkstra => dijkstra(graph, source),
        ShortestPathAlgorithm::BellmanFord => {
            Err(Error::Unimplemented("bellman-ford shortest paths"))
        }
    }
}

/// Dijkstra's algorithm with lazy priority updates.
///
/// Every vertex is queued up front at its initial distance and the main
/// loop runs exactly `|V|` times; relaxations re-push vertices at improved
/// distances, so stale queue entries for already-visited vertices surface
/// and are harmlessly marked visited again.
///
/// Only edges with strictly positive weight are relaxed. Zero-weight edges
/// therefore never shorten a path and their targets stay at their previous
/// (possibly unreachable) distance.
fn dijkstra<G: Graph>(
    graph: &G,
    source: &G::VertexId,
) -> Result<ShortestPaths<G::VertexId, G::Weight>> {
    if !graph.contains_vertex(source) {
        return Err(Error::UnknownVertex(source.to_string()));
    }

    let vertices = graph.vertices();
    let mut dist: FxHashMap<G::VertexId, Distance<G::Weight>> = FxHashMap::default();
    let mut pred: FxHashMap<G::VertexId, Option<G::VertexId>> = FxHashMap::default();
    let mut visited: FxHashMap<G::VertexId, bool> = FxHashMap::default();

    for v in &vertices {
        let d = if v == source {
            Distance::Finite(G::Weight::default())
        } else {
            Distance::Unreachable
        };
        dist.insert(v.clone(), d);
        pred.insert(v.clone(), None);
        visited.insert(v.clone(), false);
    }

    let mut queue: PriorityQueue<G::VertexId, Distance<G::Weight>> = PriorityQueue::new();
    for v in &vertices {
        queue.push(v.clone(), dist[v]);
    }

    for _ in 0..vertices.len() {
        let u = queue.pop()?;
        visited.insert(u.clone(), true);
        let from_u = dist[&u];

        for v in &vertices {
            let Some(weight) = graph.edge_weight(&u, v) else {
                continue;
            };
            if weight <= G::Weight::default() || visited[v] {
                continue;
            }
            let candidate = from_u + weight;
            if candidate < dist[v] {
                dist.insert(v.clone(), candidate);
                pred.insert(v.clone(), Some(u.clone()));
                queue.push(v.clone(), candidate);
            }
        }
    }

    Ok(ShortestPaths { dist, pred })
}
