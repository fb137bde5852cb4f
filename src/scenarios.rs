//! Built-in sample graphs for the demo binary

use bellman_paths::{EdgeStore, Vertex, Weight};

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub vertex_count: usize,
    pub edges: &'static [(Vertex, Vertex, Weight)],
}

impl Scenario {
    pub fn build(&self) -> bellman_paths::Result<EdgeStore> {
        EdgeStore::from_edges(self.vertex_count, self.edges.iter().copied())
    }
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "negative-edge",
        description: "Three vertices, one negative edge, no cycle",
        vertex_count: 3,
        edges: &[(0, 1, 4), (1, 2, -2)],
    },
    Scenario {
        name: "negative-cycle",
        description: "Two vertices joined by a cycle of weight -2",
        vertex_count: 2,
        edges: &[(0, 1, 1), (1, 0, -3)],
    },
    Scenario {
        name: "unreachable",
        description: "Vertex 2 has no incoming edges",
        vertex_count: 3,
        edges: &[(0, 1, 5), (2, 1, 1)],
    },
    Scenario {
        name: "single",
        description: "One vertex, no edges",
        vertex_count: 1,
        edges: &[],
    },
    Scenario {
        name: "classic",
        description: "Five vertices with mixed weights",
        vertex_count: 5,
        edges: &[
            (0, 1, 6),
            (0, 3, 7),
            (1, 2, 5),
            (1, 3, 8),
            (1, 4, -4),
            (2, 1, -2),
            (3, 2, -3),
            (3, 4, 9),
            (4, 0, 2),
            (4, 2, 7),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}
