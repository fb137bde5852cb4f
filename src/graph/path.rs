use serde::Serialize;

use super::result::ShortestPathResult;
use super::types::{in_range, Distance, Vertex};
use crate::error::{GraphError, Result};

/// Lazy walk from a vertex back through its parents, target first.
///
/// Stops after the vertex that has no parent. A well-formed chain visits at
/// most `vertex_count` vertices; a longer walk yields one `InternalInvariant`
/// error and ends.
#[derive(Debug, Clone)]
pub struct ParentWalk<'r> {
    parents: &'r [Option<Vertex>],
    next: Option<Vertex>,
    visited: usize,
}

impl<'r> ParentWalk<'r> {
    pub fn new(parents: &'r [Option<Vertex>], start: Vertex) -> Self {
        Self {
            parents,
            next: Some(start),
            visited: 0,
        }
    }
}

impl Iterator for ParentWalk<'_> {
    type Item = Result<Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if self.visited >= self.parents.len() {
            tracing::error!(
                "Parent chain longer than {} vertices at {}",
                self.parents.len(),
                current
            );
            return Some(Err(GraphError::InternalInvariant(format!(
                "parent chain exceeds {} steps; the parent relation contains a cycle",
                self.parents.len()
            ))));
        }

        let Some(&parent) = self.parents.get(current) else {
            return Some(Err(GraphError::InternalInvariant(format!(
                "parent chain leaves the vertex range at {}",
                current
            ))));
        };

        self.visited += 1;
        self.next = parent;
        Some(Ok(current))
    }
}

/// Vertex sequence of a path, source first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Vertex>);

impl Path {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    pub fn first(&self) -> Option<Vertex> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Vertex> {
        self.0.last().copied()
    }

    /// Number of edges along the path
    pub fn hop_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs
    pub fn hops(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.0
    }
}

impl IntoIterator for Path {
    type Item = Vertex;
    type IntoIter = std::vec::IntoIter<Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl PartialEq<[Vertex]> for Path {
    fn eq(&self, other: &[Vertex]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[Vertex; N]> for Path {
    fn eq(&self, other: &[Vertex; N]) -> bool {
        self.0 == other
    }
}

/// Shortest route to one target: its distance and the vertices followed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub source: Vertex,
    pub target: Vertex,
    pub distance: Distance,
    pub path: Path,
}

/// Rebuilds paths and negative cycles from the parent array of a result
pub struct PathReconstructor;

impl PathReconstructor {
    /// Vertices from the result's source to `target`, source first.
    ///
    /// Empty when `target` is unreachable; `[source]` when `target` is the source.
    /// The returned `Path` is materialized: the lazy, target-first walk it is
    /// built from is [`ParentWalk`].
    pub fn path(result: &ShortestPathResult, target: Vertex) -> Result<Path> {
        check_query(result, target)?;

        let mut vertices = ParentWalk::new(&result.parents, target).collect::<Result<Vec<_>>>()?;
        if vertices.last() != Some(&result.source) {
            return Ok(Path::default());
        }

        vertices.reverse();
        Ok(Path(vertices))
    }

    /// Distance and path to `target`, `None` when it is unreachable
    pub fn route(result: &ShortestPathResult, target: Vertex) -> Result<Option<Route>> {
        let path = Self::path(result, target)?;
        let Some(distance) = result.distance(target) else {
            return Ok(None);
        };

        if path.is_empty() {
            return Err(GraphError::InternalInvariant(format!(
                "vertex {} has distance {} but no parent chain to {}",
                target, distance, result.source
            )));
        }

        Ok(Some(Route {
            source: result.source,
            target,
            distance,
            path,
        }))
    }

    /// The negative cycle behind `negative_cycle_detected`, as a closed
    /// vertex sequence `[a, b, ..., a]` in edge direction.
    ///
    /// Returns `None` when the result has no negative cycle.
    pub fn negative_cycle(result: &ShortestPathResult) -> Result<Option<Path>> {
        if !result.negative_cycle_detected {
            return Ok(None);
        }

        let witness = result.cycle_witness.ok_or_else(|| {
            GraphError::InternalInvariant("negative cycle flagged without a witness".to_string())
        })?;

        // Stepping back vertex_count times from the witness lands on the cycle
        let vertex_count = result.vertex_count();
        let mut start = witness;
        for _ in 0..vertex_count {
            start = parent_of(result, start)?;
        }

        let mut cycle = vec![start];
        let mut current = parent_of(result, start)?;
        while current != start {
            if cycle.len() > vertex_count {
                return Err(GraphError::InternalInvariant(format!(
                    "cycle through {} does not close within {} vertices",
                    start, vertex_count
                )));
            }
            cycle.push(current);
            current = parent_of(result, current)?;
        }
        cycle.push(start);
        cycle.reverse();

        tracing::debug!("Extracted negative cycle with {} hops", cycle.len() - 1);
        Ok(Some(Path(cycle)))
    }
}

fn check_query(result: &ShortestPathResult, target: Vertex) -> Result<()> {
    if result.negative_cycle_detected {
        return Err(GraphError::PathsUndefined {
            origin: result.source,
        });
    }
    if !in_range(target, result.vertex_count()) {
        return Err(GraphError::InvalidVertex {
            vertex: target,
            vertex_count: result.vertex_count(),
        });
    }
    Ok(())
}

fn parent_of(result: &ShortestPathResult, vertex: Vertex) -> Result<Vertex> {
    result.parent(vertex).ok_or_else(|| {
        tracing::error!("Vertex {} on a negative cycle has no parent", vertex);
        GraphError::InternalInvariant(format!("vertex {} on a negative cycle has no parent", vertex))
    })
}
