use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
};

use crate::{
    graph::Graph,
    vertex::{Cost, Vertex},
};

/// A shortest path found by [`Graph::shortest_path`]: the vertices from start
/// to end inclusive, and the sum of the edge weights along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<V> {
    vertices: Vec<V>,
    cost: Cost,
}

impl<V> ShortestPath<V> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the number of edges in the path.
    pub fn num_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// An entry in the Dijkstra frontier.  Entries are ordered by cost, then by
/// the order in which they were pushed, so that among equally distant
/// vertices the one discovered first is extracted first.
struct FrontierEntry<'g, V> {
    cost: Cost,
    seq: usize,
    vertex: &'g V,
}

impl<V> PartialEq for FrontierEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for FrontierEntry<'_, V> {}

impl<V> PartialOrd for FrontierEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for FrontierEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Runs Dijkstra's algorithm from `start`, stopping as soon as `end` is
/// extracted from the frontier.  Returns `None` if `end` is unreachable or
/// either vertex is missing.
///
/// A vertex is pushed onto the frontier again every time its distance
/// improves instead of having its key decreased; entries whose cost is worse
/// than the vertex's best known distance are skipped when extracted.
pub(crate) fn dijkstra<V: Vertex>(graph: &Graph<V>, start: &V, end: &V) -> Option<ShortestPath<V>> {
    let start = graph.stored_vertex(start)?;
    let end = graph.stored_vertex(end)?;

    let mut distances: HashMap<&V, Cost> = HashMap::with_capacity(graph.num_vertices());
    let mut previous: HashMap<&V, &V> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;

    distances.insert(start, 0);
    frontier.push(Reverse(FrontierEntry {
        cost: 0,
        seq,
        vertex: start,
    }));

    while let Some(Reverse(FrontierEntry { cost, vertex, .. })) = frontier.pop() {
        if distances.get(vertex).is_some_and(|&best| cost > best) {
            continue;
        }
        if vertex == end {
            break;
        }
        for (target, weight) in graph.edges_from(vertex) {
            let candidate = cost + Cost::from(weight);
            if distances.get(target).is_none_or(|&best| candidate < best) {
                distances.insert(target, candidate);
                previous.insert(target, vertex);
                seq += 1;
                frontier.push(Reverse(FrontierEntry {
                    cost: candidate,
                    seq,
                    vertex: target,
                }));
            }
        }
    }

    let vertices = reconstruct_path(&previous, start, end, graph.num_vertices())?;
    let cost = distances.get(end).copied()?;
    Some(ShortestPath {
        vertices: vertices.into_iter().cloned().collect(),
        cost,
    })
}

/// Walks the predecessor map back from `end`.  Returns `None` unless the walk
/// arrives at `start`.  The walk is cut off after `max_len` steps, which only
/// matters if negative weights produced a cyclic predecessor chain.
fn reconstruct_path<'g, V: Vertex>(
    previous: &HashMap<&'g V, &'g V>,
    start: &'g V,
    end: &'g V,
    max_len: usize,
) -> Option<Vec<&'g V>> {
    if start != end && !previous.contains_key(end) {
        return None;
    }
    let mut path = vec![end];
    let mut at = end;
    while let Some(&prev) = previous.get(at) {
        if path.len() > max_len {
            return None;
        }
        path.push(prev);
        at = prev;
    }
    path.reverse();
    (path.first() == Some(&start)).then_some(path)
}
