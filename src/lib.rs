//! Single-source shortest paths over weighted directed graphs with negative
//! edge weights, using Bellman-Ford relaxation.
//!
//! Build an [`EdgeStore`], run [`RelaxationEngine::compute`] from a source,
//! check [`ShortestPathResult::negative_cycle_detected`], then rebuild paths
//! with [`PathReconstructor`].

pub mod config;
pub mod error;
pub mod graph;

pub use config::EngineConfig;
pub use error::{GraphError, Result};
pub use graph::{
    Distance, Edge, EdgeStore, Path, PathReconstructor, RelaxationEngine, RelaxationState, Route,
    ShortestPathResult, Vertex, Weight, DISTANCE_FLOOR, UNREACHED,
};
