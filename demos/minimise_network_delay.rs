//! Point-to-point delay driver.
//!
//! Reads a weighted undirected network, then answers delay queries between
//! vertex pairs with Dijkstra, caching the full single-source result per
//! queried source.
//!
//! Input: vertex count `N` (vertices are named 1..=N), edge count `E`, `E`
//! lines `u v t`, query count `K`, then `K` lines `u v`. Output: one
//! delay per query (`inf` if unreachable).

use std::collections::HashMap;
use std::error::Error;
use std::io::{self, BufRead};

use heapgraph::algorithms::{shortest_paths, ShortestPathAlgorithm, ShortestPaths};
use heapgraph::graph::AdjacencyList;

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
        let t: i64 = parts.next().ok_or("missing edge delay")?.parse()?;
        graph.add_undirected(u, v, t);
    }

    let k: usize = next_line(&mut lines)?.trim().parse()?;
    let mut cache: HashMap<String, ShortestPaths<String, i64>> = HashMap::new();
    for _ in 0..k {
        let line = next_line(&mut lines)?;
        let mut parts = line.split_whitespace();
        let u = parts.next().ok_or("missing query source")?.to_string();
        let v = parts.next().ok_or("missing query target")?.to_string();

        if !cache.contains_key(&u) {
            let paths = shortest_paths(&graph, ShortestPathAlgorithm::Dijkstra, &u)?;
            cache.insert(u.clone(), paths);
        }
        println!("{}", cache[&u].distance_to(&v)?);
    }
    Ok(())
}
