//! Engine configuration

/// Largest supported vertex count.
///
/// Bounds the per-call distance and parent arrays, and keeps every simple
/// path sum (at most `2^24 * 2^31` in magnitude) far from the `i64` floor.
pub const MAX_VERTICES: usize = 1 << 24;

/// Largest edge capacity an `EdgeStore` accepts
pub const MAX_EDGES: usize = 1 << 28;

/// Env var toggling [`EngineConfig::stop_when_stable`]
pub const STOP_WHEN_STABLE_ENV: &str = "BELLMAN_STOP_WHEN_STABLE";

/// Configuration for `RelaxationEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// End the bounded loop early once a full round improves nothing.
    /// The negative-cycle check still runs.
    pub stop_when_stable: bool,
}

impl EngineConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let stop_when_stable = std::env::var(STOP_WHEN_STABLE_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { stop_when_stable }
    }

    pub fn with_stop_when_stable(mut self, enabled: bool) -> Self {
        self.stop_when_stable = enabled;
        self
    }

    /// Upper bound on relaxation rounds for a graph of `vertex_count` vertices
    pub fn max_rounds(&self, vertex_count: usize) -> usize {
        vertex_count.saturating_sub(1)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_max_rounds() {
        let config = EngineConfig::default();
        assert_eq!(config.max_rounds(0), 0);
        assert_eq!(config.max_rounds(1), 0);
        assert_eq!(config.max_rounds(5), 4);
    }

    #[test]
    fn test_builder_toggle() {
        let config = EngineConfig::default().with_stop_when_stable(true);
        assert!(config.stop_when_stable);
    }
}
