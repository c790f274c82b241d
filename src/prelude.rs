pub use crate::copier::GraphCopier;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{EdgeRef, Graph};
pub use crate::shortest_path::ShortestPath;
pub use crate::vertex::{Cost, DEFAULT_WEIGHT, Vertex, Weight};
