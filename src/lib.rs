//! Heap-Backed Graph Algorithms for Rust
//!
//! This crate provides classic graph algorithms driven by a priority queue,
//! together with the D-ary heap that backs it:
//!
//! - **D-ary Heap**: array-backed min/max heap with configurable branching
//!   factor; O(n) bulk build, O(log_d n) insert and extract
//! - **Priority Queue**: binary-heap adapter pushing `(value, priority)`
//!   pairs, with lazy priority updates by duplicate insertion
//! - **Prim's MST**: minimum spanning tree over an adjacency-list graph
//! - **Dijkstra**: single-source shortest paths with distances and
//!   predecessors
//!
//! # Example
//!
//! ```rust
//! use heapgraph::algorithms::{minimum_spanning_tree, MstAlgorithm};
//! use heapgraph::graph::AdjacencyList;
//!
//! let mut graph: AdjacencyList<i64> = AdjacencyList::new();
//! graph.add_undirected("u", "v", 3);
//!
//! let mst = minimum_spanning_tree(&graph, MstAlgorithm::Prim).unwrap();
//! assert_eq!(mst.total_edge_weight(), 6); // both directions of the one edge
//! ```

pub mod algorithms;
pub mod dary;
pub mod error;
pub mod graph;
pub mod queue;

// Re-export the main types for convenience
pub use algorithms::{
    minimum_spanning_tree, shortest_paths, Distance, MstAlgorithm, ShortestPathAlgorithm,
    ShortestPaths,
};
pub use dary::{DaryHeap, HeapOrder};
pub use error::{Error, Result};
pub use graph::{AdjacencyList, Graph, Weight};
pub use queue::{PriorityQueue, QueueBacking, QueueOrder};
