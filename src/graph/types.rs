/// Vertices are plain indices in `[0, vertex_count)`
pub type Vertex = usize;

/// Edge weight, may be negative
pub type Weight = i32;

/// Accumulated path weight from the source
pub type Distance = i64;

/// Distance of a vertex the source has not reached (yet).
///
/// Never add a weight to this value: every relaxation checks for it first.
pub const UNREACHED: Distance = Distance::MAX;

/// Lowest representable distance.
///
/// Simple paths over at most `MAX_VERTICES` vertices stay far above it, so a
/// relaxation that hits the floor proves a reachable negative cycle.
pub const DISTANCE_FLOOR: Distance = Distance::MIN;

/// True when `vertex` is a valid index for a graph of `vertex_count` vertices
pub(crate) fn in_range(vertex: Vertex, vertex_count: usize) -> bool {
    vertex < vertex_count
}

/// A directed, weighted edge `source -> destination`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: Vertex, destination: Vertex, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// True for edges that start and end on the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Candidate distance for `destination` when reaching it through this edge.
    ///
    /// Returns `None` while `source_distance` is still [`UNREACHED`]. Sums
    /// saturate at [`DISTANCE_FLOOR`] and never reach the sentinel.
    pub fn extend(&self, source_distance: Distance) -> Option<Distance> {
        if source_distance == UNREACHED {
            return None;
        }
        let sum = source_distance.saturating_add(Distance::from(self.weight));
        Some(sum.min(UNREACHED - 1))
    }
}
