//! Graph capability contract and adjacency-list implementation
//!
//! The traversal algorithms in [`crate::algorithms`] consume graphs only
//! through the [`Graph`] trait: vertex iteration, neighbor iteration,
//! directed edge-weight lookup, and construction of a fresh empty graph for
//! accumulating output. Input graphs are never mutated by the algorithms, so
//! callers are free to mutate a graph between invocations.
//!
//! [`AdjacencyList`] is the bundled implementation: vertices are named by
//! strings, `vertices()` reports them in insertion order (deterministic, so
//! algorithm results are reproducible), and edges are directed with one
//! weight per ordered vertex pair. Undirected graphs are represented by
//! storing each edge in both directions at equal weight.

use std::fmt;
use std::hash::Hash;
use std::ops::Add;

use rustc_hash::FxHashMap;

/// Bound for edge weights and path costs.
///
/// Requires ordering, copying, addition and a zero value for initialization.
/// Signed integers qualify, which the maximum-spanning-tree driver relies on
/// (it negates weights).
pub trait Weight: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Weight for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// The minimal graph capability consumed by the traversal algorithms
pub trait Graph {
    /// Vertex identifier; string-like, unique per vertex
    type VertexId: Clone + Eq + Hash + fmt::Display;

    /// Edge weight type
    type Weight: Weight;

    /// All vertices, in a deterministic order.
    ///
    /// The order decides which vertex Prim's algorithm starts from.
    fn vertices(&self) -> Vec<Self::VertexId>;

    /// Returns true if `v` is a vertex of this graph.
    fn contains_vertex(&self, v: &Self::VertexId) -> bool;

    /// Vertices reachable from `v` by one directed edge.
    fn neighbors(&self, v: &Self::VertexId) -> Vec<Self::VertexId>;

    /// Weight of the directed edge `from -> to`, or `None` if absent.
    fn edge_weight(&self, from: &Self::VertexId, to: &Self::VertexId)
        -> Option<Self::Weight>;

    /// A fresh empty graph of the same implementation, for output
    /// construction.
    fn empty_like(&self) -> Self;

    /// Adds a vertex. Adding an existing vertex is a no-op.
    fn add_vertex(&mut self, v: Self::VertexId);

    /// Adds (or overwrites) the directed edge `from -> to`. Endpoints not
    /// yet present are added.
    fn add_edge(&mut self, from: Self::VertexId, to: Self::VertexId, weight: Self::Weight);
}

/// Adjacency-list graph with string vertex names and directed weighted edges
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList<W> {
    /// Vertices in insertion order
    order: Vec<String>,
    /// Out-neighbor lists, insertion-ordered per vertex
    adjacency: FxHashMap<String, Vec<String>>,
    /// Edge weights keyed from -> to
    weights: FxHashMap<String, FxHashMap<String, W>>,
}

impl<W: Weight> AdjacencyList<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        AdjacencyList {
            order: Vec::new(),
            adjacency: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }

    /// Creates a graph containing the given vertices and no edges.
    pub fn with_vertices<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for name in names {
            graph.add_vertex(name.into());
        }
        graph
    }

    /// Adds the edge in both directions at equal weight.
    pub fn add_undirected(&mut self, u: impl Into<String>, v: impl Into<String>, weight: W) {
        let (u, v) = (u.into(), v.into());
        self.add_edge(u.clone(), v.clone(), weight);
        self.add_edge(v, u, weight);
    }

    /// Removes a vertex together with every edge incident to it, in both
    /// directions. Removing an absent vertex is a no-op.
    pub fn remove_vertex(&mut self, v: &str) {
        if self.adjacency.remove(v).is_none() {
            return;
        }
        self.order.retain(|name| name != v);
        for list in self.adjacency.values_mut() {
            list.retain(|name| name != v);
        }
        self.weights.remove(v);
        for targets in self.weights.values_mut() {
            targets.remove(v);
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// All directed edges as `(from, to, weight)`, in vertex insertion order
    /// and per-vertex neighbor insertion order.
    pub fn edges(&self) -> Vec<(String, String, W)> {
        let mut result = Vec::new();
        for from in &self.order {
            let Some(neighbors) = self.adjacency.get(from) else {
                continue;
            };
            for to in neighbors {
                if let Some(weight) = self.weights.get(from).and_then(|m| m.get(to)) {
                    result.push((from.clone(), to.clone(), *weight));
                }
            }
        }
        result
    }

    /// Sum of all directed edge weights. An undirected edge stored in both
    /// directions contributes twice.
    pub fn total_edge_weight(&self) -> W {
        self.edges()
            .into_iter()
            .fold(W::default(), |acc, (_, _, w)| acc + w)
    }
}

impl<W: Weight> Graph for AdjacencyList<W> {
    type VertexId = String;
    type Weight = W;

    fn vertices(&self) -> Vec<String> {
        self.order.clone()
    }

    fn contains_vertex(&self, v: &String) -> bool {
        self.adjacency.contains_key(v)
    }

    fn neighbors(&self, v: &String) -> Vec<String> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }

    fn edge_weight(&self, from: &String, to: &String) -> Option<W> {
        self.weights.get(from).and_then(|m| m.get(to)).copied()
    }

    fn empty_like(&self) -> Self {
        Self::new()
    }

    fn add_vertex(&mut self, v: String) {
        if !self.adjacency.contains_key(&v) {
            self.order.push(v.clone());
            self.adjacency.insert(v, Vec::new());
        }
    }

    fn add_edge(&mut self, from: String, to: String, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        let neighbors = self.adjacency.entry(from.clone()).or_default();
        if !neighbors.contains(&to) {
            neighbors.push(to.clone());
        }
        self.weights.entry(from).or_default().insert(to, weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_in_insertion_order() {
        let graph: AdjacencyList<i64> = AdjacencyList::with_vertices(["c", "a", "b"]);
        assert_eq!(graph.vertices(), vec!["c", "a", "b"]);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_vertex("a".into());
        graph.add_vertex("a".into());
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_adds_endpoints() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_edge("u".into(), "v".into(), 3);

        assert!(graph.contains_vertex(&"u".into()));
        assert!(graph.contains_vertex(&"v".into()));
        assert_eq!(graph.edge_weight(&"u".into(), &"v".into()), Some(3));
        // Directed: the reverse edge was not added.
        assert_eq!(graph.edge_weight(&"v".into(), &"u".into()), None);
    }

    #[test]
    fn test_readding_edge_overwrites_weight() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_edge("u".into(), "v".into(), 3);
        graph.add_edge("u".into(), "v".into(), 7);

        assert_eq!(graph.edge_weight(&"u".into(), &"v".into()), Some(7));
        assert_eq!(graph.neighbors(&"u".into()), vec!["v"]);
    }

    #[test]
    fn test_add_undirected() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_undirected("u", "v", 5);

        assert_eq!(graph.edge_weight(&"u".into(), &"v".into()), Some(5));
        assert_eq!(graph.edge_weight(&"v".into(), &"u".into()), Some(5));
        assert_eq!(graph.total_edge_weight(), 10);
    }

    #[test]
    fn test_remove_vertex_strips_incident_edges() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_undirected("a", "b", 1);
        graph.add_undirected("b", "c", 2);

        graph.remove_vertex("b");

        assert_eq!(graph.vertices(), vec!["a", "c"]);
        assert!(graph.neighbors(&"a".into()).is_empty());
        assert!(graph.neighbors(&"c".into()).is_empty());
        assert_eq!(graph.edge_weight(&"a".into(), &"b".into()), None);
        assert_eq!(graph.edge_weight(&"c".into(), &"b".into()), None);
        assert_eq!(graph.total_edge_weight(), 0);
    }

    #[test]
    fn test_remove_absent_vertex_is_noop() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::with_vertices(["a"]);
        graph.remove_vertex("z");
        assert_eq!(graph.vertices(), vec!["a"]);
    }

    #[test]
    fn test_edges_deterministic_order() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_edge("a".into(), "b".into(), 1);
        graph.add_edge("a".into(), "c".into(), 2);
        graph.add_edge("b".into(), "c".into(), 3);

        let edges = graph.edges();
        assert_eq!(
            edges,
            vec![
                ("a".into(), "b".into(), 1),
                ("a".into(), "c".into(), 2),
                ("b".into(), "c".into(), 3),
            ]
        );
    }

    #[test]
    fn test_empty_like_is_empty() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::new();
        graph.add_undirected("a", "b", 1);

        let fresh = graph.empty_like();
        assert_eq!(fresh.vertex_count(), 0);
        assert!(fresh.edges().is_empty());
    }
}
