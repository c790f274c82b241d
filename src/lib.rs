//! A weighted graph over a generic vertex type, either directed or
//! undirected, with depth-first and breadth-first traversal and Dijkstra
//! shortest paths.
//!
//! ```
//! use weighted_graph::Graph;
//!
//! let mut graph = Graph::undirected();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v)?;
//! }
//! graph.add_edge(&"A", &"B", 1)?;
//! graph.add_edge(&"B", &"C", 2)?;
//! graph.add_edge(&"A", &"C", 5)?;
//! graph.add_edge(&"C", &"D", 1)?;
//!
//! assert_eq!(graph.dijkstra(&"A", &"D")?, vec!["A", "B", "C", "D"]);
//! assert_eq!(graph.get_edge_weight(&"C", &"A"), Some(5));
//! # Ok::<(), weighted_graph::GraphError>(())
//! ```
pub mod copier;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod shortest_path;
pub mod tracing_support;
pub mod vertex;

#[cfg(feature = "pathfinding")]
mod components;

#[cfg(test)]
mod generate_large_graph;
#[cfg(test)]
mod graph_test_support;

pub use copier::GraphCopier;
pub use error::{GraphError, Result};
pub use graph::{EdgeRef, Graph};
pub use search::{BfsIterator, DfsIterator};
pub use shortest_path::ShortestPath;
pub use vertex::{Cost, DEFAULT_WEIGHT, Vertex, Weight};
