//! Streaming k-th order statistics driver.
//!
//! Maintains two binary heaps over a stream of numbers: a max-heap of the k
//! smallest values seen (root = k-th smallest) and a min-heap of the k
//! largest (root = k-th largest). After each number it prints both roots.
//!
//! Input: `k`, then one number per line; a `0` is processed and then ends
//! the stream. Output: `kth-smallest kth-largest` per number. While fewer
//! than k numbers have been seen, the roots are the extremes seen so far.

use std::error::Error;
use std::io::{self, BufRead};

use heapgraph::dary::{DaryHeap, HeapOrder};

fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, Box<dyn Error>> {
    Ok(lines.next().ok_or("unexpected end of input")??)
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let k: usize = next_line(&mut lines)?.trim().parse()?;
    let mut largest: DaryHeap<(), i64> = DaryHeap::binary(HeapOrder::Min);
    let mut smallest: DaryHeap<(), i64> = DaryHeap::binary(HeapOrder::Max);

    loop {
        let current: i64 = next_line(&mut lines)?.trim().parse()?;

        largest.insert(current, ());
        smallest.insert(current, ());
        if largest.len() > k {
            largest.extract()?;
        }
        if smallest.len() > k {
            smallest.extract()?;
        }

        let kth_smallest = *smallest.peek()?.0;
        let kth_largest = *largest.peek()?.0;
        println!("{kth_smallest} {kth_largest}");

        if current == 0 {
            break;
        }
    }
    Ok(())
}
