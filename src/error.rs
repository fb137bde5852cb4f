//! Error taxonomy for graph construction and path queries
//!
//! A negative cycle is not an error: it is reported through
//! `ShortestPathResult::negative_cycle_detected`.

use thiserror::Error;

use crate::graph::types::Vertex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Invalid vertex count, or an edge endpoint outside the vertex range
    #[error("invalid graph configuration: {0}")]
    Configuration(String),

    /// More edges added than the store was sized for
    #[error("cannot add more edges than initialized: capacity is {capacity}")]
    CapacityExceeded { capacity: usize },

    /// Source vertex outside `[0, vertex_count)` (including empty graphs)
    #[error("invalid source vertex {vertex} for a graph with {vertex_count} vertices")]
    InvalidSource { vertex: Vertex, vertex_count: usize },

    /// Query vertex outside `[0, vertex_count)`
    #[error("invalid vertex {vertex} for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: Vertex, vertex_count: usize },

    /// Paths were requested from a result that contains a negative cycle
    #[error("no shortest paths exist from vertex {origin}: negative cycle detected")]
    PathsUndefined { origin: Vertex },

    /// The parent relation is malformed; indicates a defect upstream
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
