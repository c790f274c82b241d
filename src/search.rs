use std::collections::{HashSet, VecDeque};

use crate::{graph::Graph, vertex::Vertex};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Iterator over the vertices reachable from a start vertex, in breadth-first
/// order.  Vertices are marked when they are discovered, so each vertex is
/// queued at most once.
pub struct BfsIterator<'g, V> {
    graph: &'g Graph<V>,
    visited: HashSet<&'g V>,
    queue: VecDeque<&'g V>,
}

impl<'g, V> BfsIterator<'g, V>
where
    V: Vertex,
{
    /// Starts a search at `start`.  The iterator is empty if `start` is not
    /// in the graph.
    pub fn new(graph: &'g Graph<V>, start: &V) -> Self {
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        let mut queue = VecDeque::new();
        if let Some(start) = graph.stored_vertex(start) {
            visited.insert(start);
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, V> Iterator for BfsIterator<'g, V>
where
    V: Vertex,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for neighbor in self.graph.successors(vertex) {
            if self.visited.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

/// Iterator over the vertices reachable from a start vertex, in depth-first
/// pre-order.
///
/// The order is the one produced by visiting a vertex and then recursing into
/// each unvisited neighbor in edge insertion order, but an explicit stack is
/// used so that deep graphs cannot overflow the call stack.
pub struct DfsIterator<'g, V> {
    graph: &'g Graph<V>,
    visited: HashSet<&'g V>,
    stack: Vec<&'g V>,
}

impl<'g, V> DfsIterator<'g, V>
where
    V: Vertex,
{
    /// Starts a search at `start`.  The iterator is empty if `start` is not
    /// in the graph.
    pub fn new(graph: &'g Graph<V>, start: &V) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: graph.stored_vertex(start).into_iter().collect(),
        }
    }
}

impl<'g, V> Iterator for DfsIterator<'g, V>
where
    V: Vertex,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex) {
                let successors = self
                    .graph
                    .successors(vertex)
                    .filter(|neighbor| !self.visited.contains(*neighbor))
                    .collect::<Vec<_>>();
                // Reversed so the first successor is popped first.
                self.stack.extend(successors.into_iter().rev());
                return Some(vertex);
            }
        }
        None
    }
}
