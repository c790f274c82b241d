//! [`Graph`] is the core container of this library: a mutable graph over a
//! generic vertex type with integer edge weights, either directed or
//! undirected.
//!
//! The directedness of a graph is chosen when it is created and never
//! changes.  In an undirected graph every edge is stored twice, once in each
//! direction, and every mutation keeps both directions in step.
//!
//! This module provides:
//!
//! - Mutation: adding and removing vertices and edges
//! - Queries: adjacency, edge weights, vertex snapshots
//! - Graph traversal: [`Graph::dfs`], [`Graph::bfs`] and their lazy iterators
//! - Shortest paths: [`Graph::dijkstra`] and [`Graph::shortest_path`]
mod edge_list;

use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Debug, Display},
};

use derivative::Derivative;

use crate::{
    error::{GraphError, Result},
    search::{BfsIterator, DfsIterator},
    shortest_path::{self, ShortestPath},
    tracing_support::{debug, info_span},
    vertex::{DEFAULT_WEIGHT, Vertex, Weight},
};

use edge_list::EdgeList;

/// A reference to a stored edge, as yielded by [`Graph::edges`].
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = "V: Debug"),
    PartialEq(bound = "V: PartialEq"),
    Eq(bound = "V: Eq")
)]
pub struct EdgeRef<'g, V> {
    pub source: &'g V,
    pub target: &'g V,
    pub weight: Weight,
}

/// A weighted graph with vertices of type `V`.
///
/// The default graph is empty and undirected.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Clone(bound = "V: Clone"),
    Debug(bound = "V: Debug")
)]
pub struct Graph<V> {
    directed: bool,
    adjacency: HashMap<V, EdgeList<V>>,
}

impl<V: Vertex> Graph<V> {
    /// Creates an empty graph.  `directed` is fixed for the lifetime of the
    /// graph; see [`Graph::copy_with_directedness`] to rebuild a graph with
    /// the other mode.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // Vertices

    /// Adds a vertex with no edges.  Adding a vertex that is already present
    /// does nothing.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        self.insert_vertex(vertex);
        Ok(())
    }

    pub(crate) fn insert_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            debug!(?vertex, "vertex added");
            self.adjacency.insert(vertex, EdgeList::default());
        }
    }

    /// Removes a vertex along with every edge that starts or ends at it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        if self.adjacency.remove(vertex).is_none() {
            return Err(GraphError::missing_vertex(vertex));
        }
        for edges in self.adjacency.values_mut() {
            edges.remove(vertex);
        }
        debug!(?vertex, "vertex removed");
        Ok(())
    }

    /// Removes all vertices and edges.  The directedness is kept.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        debug!("graph cleared");
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns a snapshot of the vertex set.  Changing the returned set has no
    /// effect on the graph.
    pub fn get_vertices(&self) -> HashSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Iterates over the vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // Edges

    /// Adds an edge from `from` to `to`, replacing any existing edge between
    /// them.  In an undirected graph the reverse edge is added or replaced
    /// with the same weight.  Fails without changing the graph if either
    /// vertex is missing.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: Weight) -> Result<()> {
        self.check_endpoints(from, to)?;
        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Inserts or replaces an edge (and its mirror, if undirected), creating
    /// any missing endpoint.
    pub(crate) fn insert_edge(&mut self, from: &V, to: &V, weight: Weight) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert_or_replace(to.clone(), weight);
        if !self.directed {
            self.adjacency
                .entry(to.clone())
                .or_default()
                .insert_or_replace(from.clone(), weight);
        }
        debug!(?from, ?to, weight, "edge added");
    }

    /// Adds an edge with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge(&mut self, from: &V, to: &V) -> Result<()> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Removes the edge from `from` to `to` (and its mirror, if undirected).
    /// Removing an edge that does not exist is not an error, but both
    /// vertices must exist.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<()> {
        self.check_endpoints(from, to)?;
        self.edge_list_mut(from)?.remove(to);
        if !self.directed {
            self.edge_list_mut(to)?.remove(from);
        }
        debug!(?from, ?to, "edge removed");
        Ok(())
    }

    /// Returns the targets of the edges leaving `vertex`, in the order the
    /// edges were inserted.
    pub fn get_adjacent(&self, vertex: &V) -> Result<Vec<V>> {
        Ok(self.edge_list(vertex)?.targets().cloned().collect())
    }

    /// Returns the weight of the edge from `from` to `to`, or `None` if there
    /// is no such edge.  Unlike the other queries this never fails: a missing
    /// `from` vertex also yields `None`.
    pub fn get_edge_weight(&self, from: &V, to: &V) -> Option<Weight> {
        self.adjacency.get(from)?.get(to)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|edges| edges.contains(to))
    }

    /// Iterates over all edges.  In an undirected graph each mirrored pair is
    /// yielded once, in one of its two orientations.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, V>> + '_ {
        let mut seen: HashSet<&V> = HashSet::with_capacity(self.adjacency.len());
        let mut edges = Vec::new();
        for (source, list) in &self.adjacency {
            seen.insert(source);
            for (target, weight) in list.iter() {
                if self.directed || target == source || !seen.contains(target) {
                    edges.push(EdgeRef {
                        source,
                        target,
                        weight,
                    });
                }
            }
        }
        edges.into_iter()
    }

    /// Gets the number of edges, counting a mirrored undirected pair once.
    pub fn num_edges(&self) -> usize {
        let stored: usize = self.adjacency.values().map(EdgeList::len).sum();
        if self.directed {
            stored
        } else {
            // Every edge but a self loop is stored once per direction.
            let loops = self
                .adjacency
                .iter()
                .filter(|(vertex, edges)| edges.contains(vertex))
                .count();
            (stored + loops) / 2
        }
    }

    /// Iterates over `(target, weight)` for the edges leaving `vertex`.
    /// Yields nothing for a missing vertex.
    pub(crate) fn edges_from<'g>(
        &'g self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'g V, Weight)> + use<'g, V> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|edges| edges.iter())
    }

    /// Iterates over the targets of the edges leaving `vertex`.
    pub(crate) fn successors<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + use<'g, V> {
        self.edges_from(vertex).map(|(target, _)| target)
    }

    /// Gets the graph's own copy of `vertex`, so that references to it live as
    /// long as the graph is borrowed.
    pub(crate) fn stored_vertex(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }

    pub(crate) fn check_vertex(&self, vertex: &V) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(GraphError::missing_vertex(vertex))
        }
    }

    pub(crate) fn check_endpoints(&self, from: &V, to: &V) -> Result<()> {
        if self.adjacency.contains_key(from) && self.adjacency.contains_key(to) {
            Ok(())
        } else {
            Err(GraphError::missing_endpoints(from, to))
        }
    }

    fn edge_list(&self, vertex: &V) -> Result<&EdgeList<V>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::missing_vertex(vertex))
    }

    fn edge_list_mut(&mut self, vertex: &V) -> Result<&mut EdgeList<V>> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| GraphError::missing_vertex(vertex))
    }

    // Searches

    /// Performs a depth-first search from `start`, returning the vertices in
    /// the order they were visited.
    pub fn dfs(&self, start: &V) -> Result<Vec<V>> {
        let _span = info_span!("dfs", start = ?start).entered();
        Ok(self.dfs_iter(start)?.cloned().collect())
    }

    /// Returns a lazy depth-first iterator starting at `start`.
    pub fn dfs_iter(&self, start: &V) -> Result<DfsIterator<'_, V>> {
        self.check_vertex(start)?;
        Ok(DfsIterator::new(self, start))
    }

    /// Performs a breadth-first search from `start`, returning the vertices
    /// in the order they were visited.
    pub fn bfs(&self, start: &V) -> Result<Vec<V>> {
        let _span = info_span!("bfs", start = ?start).entered();
        Ok(self.bfs_iter(start)?.cloned().collect())
    }

    /// Returns a lazy breadth-first iterator starting at `start`.
    pub fn bfs_iter(&self, start: &V) -> Result<BfsIterator<'_, V>> {
        self.check_vertex(start)?;
        Ok(BfsIterator::new(self, start))
    }

    // Pathfinding

    /// Finds a shortest path from `start` to `end` with Dijkstra's algorithm.
    /// Returns an empty vector if `end` is unreachable.  Edge weights must be
    /// non-negative for the result to be a shortest path.
    pub fn dijkstra(&self, start: &V, end: &V) -> Result<Vec<V>> {
        Ok(self
            .shortest_path(start, end)?
            .map(ShortestPath::into_vertices)
            .unwrap_or_default())
    }

    /// Like [`Graph::dijkstra`], but also reports the total cost, and returns
    /// `None` rather than an empty path when `end` is unreachable.
    pub fn shortest_path(&self, start: &V, end: &V) -> Result<Option<ShortestPath<V>>> {
        self.check_endpoints(start, end)?;
        let _span = info_span!("dijkstra", start = ?start, end = ?end).entered();
        Ok(shortest_path::dijkstra(self, start, end))
    }
}

/// Writes one line per vertex, in order of the vertices' text, listing the
/// edges leaving it in insertion order.
impl<V> Display for Graph<V>
where
    V: Vertex + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed {
            "directed"
        } else {
            "undirected"
        };
        writeln!(
            f,
            "{kind} graph: {} vertices, {} edges",
            self.num_vertices(),
            self.num_edges()
        )?;
        let mut lines: Vec<(String, &EdgeList<V>)> = self
            .adjacency
            .iter()
            .map(|(vertex, edges)| (vertex.to_string(), edges))
            .collect();
        lines.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, edges) in lines {
            write!(f, "{name}")?;
            if !edges.is_empty() {
                let targets: Vec<String> = edges
                    .iter()
                    .map(|(target, weight)| format!("{target} ({weight})"))
                    .collect();
                write!(f, " -> {}", targets.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
