use super::builder::EdgeStore;
use super::result::ShortestPathResult;
use super::types::{in_range, Distance, Edge, Vertex, DISTANCE_FLOOR, UNREACHED};
use crate::config::EngineConfig;
use crate::error::{GraphError, Result};

/// Distance and parent state of one Bellman-Ford run, advanced a round at a time.
///
/// Each state owns its arrays, so any number of runs can share one `EdgeStore`.
/// Once a relaxation saturates at [`DISTANCE_FLOOR`] the state is frozen:
/// that vertex proves a negative cycle and later rounds change nothing.
#[derive(Debug, Clone)]
pub struct RelaxationState<'a> {
    store: &'a EdgeStore,
    source: Vertex,
    distances: Vec<Distance>,
    parents: Vec<Option<Vertex>>,
    rounds: usize,
    floor_hit: Option<Vertex>,
}

impl<'a> RelaxationState<'a> {
    /// Fresh state: source at distance 0, everything else unreached
    pub fn new(store: &'a EdgeStore, source: Vertex) -> Result<Self> {
        let vertex_count = store.vertex_count();
        if !in_range(source, vertex_count) {
            return Err(GraphError::InvalidSource {
                vertex: source,
                vertex_count,
            });
        }

        let mut distances = vec![UNREACHED; vertex_count];
        distances[source] = 0;

        Ok(Self {
            store,
            source,
            distances,
            parents: vec![None; vertex_count],
            rounds: 0,
            floor_hit: None,
        })
    }

    /// Relax every edge once, in insertion order.
    ///
    /// Returns how many relaxations succeeded; zero means the state is stable.
    pub fn relax_round(&mut self) -> usize {
        let store = self.store;
        let mut improved = 0;
        for edge in store.edges() {
            if self.floor_hit.is_some() {
                break;
            }
            if self.relax(edge) {
                improved += 1;
            }
        }
        self.rounds += 1;
        improved
    }

    /// One extra pass with the same test. Any success means a negative cycle
    /// is reachable from the source; the last improved vertex is returned.
    fn detect_cycle(&mut self) -> Option<Vertex> {
        let store = self.store;
        let mut witness = None;
        for edge in store.edges() {
            if let Some(vertex) = self.floor_hit {
                return Some(vertex);
            }
            if self.relax(edge) {
                witness = Some(edge.destination);
            }
        }
        self.floor_hit.or(witness)
    }

    fn relax(&mut self, edge: &Edge) -> bool {
        let Some(candidate) = edge.extend(self.distances[edge.source]) else {
            return false;
        };

        if candidate < self.distances[edge.destination] {
            self.distances[edge.destination] = candidate;
            self.parents[edge.destination] = Some(edge.source);
            if candidate == DISTANCE_FLOOR {
                self.floor_hit = Some(edge.destination);
            }
            true
        } else {
            false
        }
    }

    /// Vertex whose distance saturated at [`DISTANCE_FLOOR`], if any
    pub fn floor_hit(&self) -> Option<Vertex> {
        self.floor_hit
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn parents(&self) -> &[Option<Vertex>] {
        &self.parents
    }

    /// Rounds executed so far
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    fn finish(self, cycle_witness: Option<Vertex>) -> ShortestPathResult {
        ShortestPathResult {
            source: self.source,
            distances: self.distances,
            parents: self.parents,
            negative_cycle_detected: cycle_witness.is_some(),
            cycle_witness,
            rounds: self.rounds,
        }
    }
}

/// Single-source shortest paths with negative-cycle detection (Bellman-Ford).
///
/// The engine only holds its configuration; every `compute` call starts from
/// fresh state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxationEngine {
    config: EngineConfig,
}

impl RelaxationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shortest distances from `source` to every vertex of `store`.
    ///
    /// Runs `vertex_count - 1` relaxation rounds (fewer when
    /// `stop_when_stable` is set and a round changes nothing), then checks
    /// once more for a reachable negative cycle. A negative cycle is reported
    /// in the result, not as an error.
    pub fn compute(&self, store: &EdgeStore, source: Vertex) -> Result<ShortestPathResult> {
        let state = RelaxationState::new(store, source)?;
        Ok(self.run(state))
    }

    fn run(&self, mut state: RelaxationState<'_>) -> ShortestPathResult {
        let store = state.store;
        let source = state.source;
        let max_rounds = self.config.max_rounds(store.vertex_count());

        tracing::debug!(
            "Computing shortest paths from {} over {} vertices, {} edges (max {} rounds)",
            source,
            store.vertex_count(),
            store.len(),
            max_rounds
        );

        for _ in 0..max_rounds {
            let improved = state.relax_round();
            tracing::trace!("Round {}: {} relaxations", state.rounds(), improved);

            if let Some(vertex) = state.floor_hit() {
                tracing::debug!(
                    "Distance of {} saturated in round {}, skipping remaining rounds",
                    vertex,
                    state.rounds()
                );
                break;
            }
            if improved == 0 && self.config.stop_when_stable {
                tracing::debug!("Stable after {} rounds, stopping early", state.rounds());
                break;
            }
        }

        let witness = state.detect_cycle();
        if let Some(vertex) = witness {
            tracing::warn!(
                "Negative cycle reachable from {} detected (vertex {} still improves)",
                source,
                vertex
            );
        }

        let result = state.finish(witness);
        tracing::debug!(
            "Finished after {} rounds: {} of {} vertices reachable",
            result.rounds,
            result.reachable_count(),
            result.vertex_count()
        );
        result
    }
}
