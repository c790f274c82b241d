use std::{fmt::Debug, hash::Hash};

/// A trait for types usable as graph vertices.
///
/// Vertices are plain values compared by equality and used as map keys.
/// `Debug` is required so that errors can name the vertex involved.  The
/// trait is implemented automatically for every qualifying type.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// The weight carried by an edge.
pub type Weight = i32;

/// The accumulated cost of a path.  Wider than [`Weight`] so that summing
/// weights along a path cannot overflow.
pub type Cost = i64;

/// The weight used by [`crate::Graph::add_unit_edge`].
pub const DEFAULT_WEIGHT: Weight = 1;
