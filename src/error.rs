//! Error types shared across the crate
//!
//! All operations report failures synchronously to the immediate caller.
//! There is no transient-failure class: everything here is pure in-memory
//! computation, so nothing is retried or recovered internally.

use thiserror::Error;

/// Error type for heap, queue and graph-algorithm operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `extract`/`pop`/`peek` was called on an empty heap or queue
    #[error("heap is empty")]
    EmptyHeap,

    /// A parameter was outside the supported range (e.g. heap arity below 2)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A source or target vertex is not present in the graph
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// A documented algorithm or backing strategy that has no implementation
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
