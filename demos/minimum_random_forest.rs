//! Spanning-forest driver.
//!
//! Reads a weighted undirected graph and prints the total weight of a
//! minimum spanning tree for each connected component, peeling components
//! off one at a time.
//!
//! Input: vertex count `N` (vertices are named 1..=N), edge count `E`, then
//! `E` lines `u v c`. Output: one MST weight per component.

use std::error::Error;
use std::io::{self, BufRead};

use heapgraph::algorithms::{minimum_spanning_tree, MstAlgorithm};
use heapgraph::graph::AdjacencyList;
use heapgraph::Graph;

fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, Box<dyn Error>> {
    Ok(lines.next().ok_or("unexpected end of input")??)
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n: usize = next_line(&mut lines)?.trim().parse()?;
    let e: usize = next_line(&mut lines)?.trim().parse()?;

    let mut graph: AdjacencyList<i64> =
        AdjacencyList::with_vertices((1..=n).map(|i| i.to_string()));
    for _ in 0..e {
        let line = next_line(&mut lines)?;
        let mut parts = line.split_whitespace();
        let u = parts.next().ok_or("missing edge source")?.to_string();
        let v = parts.next().ok_or("missing edge target")?.to_string();
        let c: i64 = parts.next().ok_or("missing edge weight")?.parse()?;
        graph.add_undirected(u, v, c);
    }

    while graph.vertex_count() > 0 {
        let mst = minimum_spanning_tree(&graph, MstAlgorithm::Prim)?;
        // Each undirected edge is stored in both directions.
        println!("{}", mst.total_edge_weight() / 2);
        for v in mst.vertices() {
            graph.remove_vertex(&v);
        }
    }
    Ok(())
}
