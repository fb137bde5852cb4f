use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

use super::types::{in_range, Edge, Vertex, Weight};
use crate::config::{MAX_EDGES, MAX_VERTICES};
use crate::error::{GraphError, Result};

/// Fixed-capacity, append-only list of directed weighted edges.
///
/// The vertex count and edge capacity are fixed at construction. Multi-edges
/// and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct EdgeStore {
    vertex_count: usize,
    capacity: usize,
    edges: Vec<Edge>,
}

impl EdgeStore {
    /// Create an empty store for `vertex_count` vertices and at most `edge_capacity` edges
    pub fn new(vertex_count: usize, edge_capacity: usize) -> Result<Self> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::Configuration(format!(
                "vertex count {} exceeds the supported maximum of {}",
                vertex_count, MAX_VERTICES
            )));
        }
        if edge_capacity > MAX_EDGES {
            return Err(GraphError::Configuration(format!(
                "edge capacity {} exceeds the supported maximum of {}",
                edge_capacity, MAX_EDGES
            )));
        }

        // Grows on demand; the capacity is only an upper bound
        Ok(Self {
            vertex_count,
            capacity: edge_capacity,
            edges: Vec::new(),
        })
    }

    /// Build a store holding exactly `edges`, with capacity sized to fit them
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, Weight)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let mut store = Self::new(vertex_count, edges.len())?;
        for (source, destination, weight) in edges {
            store.add_edge(source, destination, weight)?;
        }
        Ok(store)
    }

    /// Build a store from a petgraph graph, using node indices as vertices
    pub fn from_graph<N>(graph: &DiGraph<N, Weight>) -> Result<Self> {
        let mut store = Self::new(graph.node_count(), graph.edge_count())?;
        for edge in graph.edge_references() {
            store.add_edge(edge.source().index(), edge.target().index(), *edge.weight())?;
        }
        Ok(store)
    }

    /// Append one edge.
    ///
    /// A rejected edge leaves the store unchanged.
    pub fn add_edge(&mut self, source: Vertex, destination: Vertex, weight: Weight) -> Result<()> {
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        for (role, vertex) in [("source", source), ("destination", destination)] {
            if !in_range(vertex, self.vertex_count) {
                return Err(GraphError::Configuration(format!(
                    "edge {} vertex {} is outside [0, {})",
                    role, vertex, self.vertex_count
                )));
            }
        }

        self.edges.push(Edge::new(source, destination, weight));
        tracing::trace!(
            "Added edge {} -> {} (weight {}), {}/{} used",
            source,
            destination,
            weight,
            self.edges.len(),
            self.capacity
        );
        Ok(())
    }

    /// Edges added so far, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Maximum number of edges this store accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of edges added so far
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.edges.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded() {
        let mut store = EdgeStore::new(3, 1).unwrap();
        store.add_edge(0, 1, 4).unwrap();

        let err = store.add_edge(1, 2, -2).unwrap_err();
        assert_eq!(err, GraphError::CapacityExceeded { capacity: 1 });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edges_not_padded_to_capacity() {
        let mut store = EdgeStore::new(3, 10).unwrap();
        store.add_edge(0, 1, 4).unwrap();
        store.add_edge(1, 2, -2).unwrap();

        assert_eq!(store.capacity(), 10);
        assert_eq!(
            store.edges(),
            &[Edge::new(0, 1, 4), Edge::new(1, 2, -2)]
        );
    }

    #[test]
    fn test_out_of_range_endpoint() {
        let mut store = EdgeStore::new(2, 4).unwrap();

        assert!(matches!(
            store.add_edge(0, 2, 1),
            Err(GraphError::Configuration(_))
        ));
        assert!(matches!(
            store.add_edge(5, 0, 1),
            Err(GraphError::Configuration(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_multi_edges_and_self_loops_allowed() {
        let mut store = EdgeStore::new(2, 3).unwrap();
        store.add_edge(0, 1, 3).unwrap();
        store.add_edge(0, 1, 1).unwrap();
        store.add_edge(1, 1, 0).unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.is_full());
    }

    #[test]
    fn test_zero_capacity() {
        let mut store = EdgeStore::new(1, 0).unwrap();
        assert!(store.is_full());
        assert!(matches!(
            store.add_edge(0, 0, 1),
            Err(GraphError::CapacityExceeded { capacity: 0 })
        ));
    }

    #[test]
    fn test_too_many_vertices() {
        assert!(matches!(
            EdgeStore::new(MAX_VERTICES + 1, 0),
            Err(GraphError::Configuration(_))
        ));
        assert!(EdgeStore::new(MAX_VERTICES, 0).is_ok());
    }

    #[test]
    fn test_huge_capacity_rejected() {
        assert!(matches!(
            EdgeStore::new(1, usize::MAX),
            Err(GraphError::Configuration(_))
        ));
        assert!(matches!(
            EdgeStore::new(1, MAX_EDGES + 1),
            Err(GraphError::Configuration(_))
        ));
    }

    #[test]
    fn test_large_capacity_does_not_preallocate() {
        let mut store = EdgeStore::new(2, MAX_EDGES).unwrap();
        store.add_edge(0, 1, 1).unwrap();

        assert_eq!(store.capacity(), MAX_EDGES);
        assert_eq!(store.len(), 1);
        assert!(!store.is_full());
    }

    #[test]
    fn test_from_graph() {
        let mut graph: DiGraph<(), Weight> = DiGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, 4);
        graph.add_edge(b, c, -2);

        let store = EdgeStore::from_graph(&graph).unwrap();
        assert_eq!(store.vertex_count(), 3);
        assert_eq!(
            store.edges(),
            &[Edge::new(0, 1, 4), Edge::new(1, 2, -2)]
        );
    }
}
