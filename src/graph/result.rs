use serde::Serialize;

use super::types::{Distance, Vertex, UNREACHED};

/// Outcome of a single-source shortest-path computation.
///
/// When `negative_cycle_detected` is set, `distances` and `parents` are not
/// meaningful and must not be used for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult {
    pub source: Vertex,
    /// Shortest known distance per vertex, [`UNREACHED`] when there is no path
    pub distances: Vec<Distance>,
    /// Predecessor on the best known path, `None` for the source and unreached vertices
    pub parents: Vec<Option<Vertex>>,
    pub negative_cycle_detected: bool,
    /// Last vertex improved by the negative-cycle check pass
    pub cycle_witness: Option<Vertex>,
    /// Relaxation rounds actually executed (the check pass is not counted)
    pub rounds: usize,
}

impl ShortestPathResult {
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance to `vertex`, `None` when unreached, out of range, or undefined
    /// because of a negative cycle
    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        if self.negative_cycle_detected {
            return None;
        }
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d != UNREACHED)
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn parent(&self, vertex: Vertex) -> Option<Vertex> {
        self.parents.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_some()
    }

    /// True when distances and parents can be trusted
    pub fn has_shortest_paths(&self) -> bool {
        !self.negative_cycle_detected
    }

    /// Vertices with a known distance, in index order
    pub fn reachable(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.vertex_count()).filter(move |&v| self.is_reachable(v))
    }

    /// Number of vertices reachable from the source (including the source)
    pub fn reachable_count(&self) -> usize {
        self.reachable().count()
    }
}
