pub mod bellman_ford;
pub mod builder;
pub mod path;
pub mod result;
pub mod types;

// Re-exports for external use
pub use bellman_ford::{RelaxationEngine, RelaxationState};
pub use builder::EdgeStore;
pub use path::{ParentWalk, Path, PathReconstructor, Route};
pub use result::ShortestPathResult;
pub use types::{Distance, Edge, Vertex, Weight, DISTANCE_FLOOR, UNREACHED};
