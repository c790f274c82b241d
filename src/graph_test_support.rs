use std::collections::{BTreeSet, HashSet};

use quickcheck::{Arbitrary, Gen};

use crate::{Graph, Vertex, Weight};

/// An arbitrary small graph over `u8` vertices with non-negative weights,
/// built by a random sequence of insertions and removals.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph<u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_removals = usize::arbitrary(g) % 4;

        let mut graph = Graph::new(bool::arbitrary(g));
        let vertices: Vec<u8> = (0..num_vertices).map(|_| u8::arbitrary(g) % 32).collect();
        for vertex in &vertices {
            graph.add_vertex(*vertex).unwrap();
        }

        for _ in 0..num_edges {
            if vertices.is_empty() {
                break;
            }
            let source = vertices[usize::arbitrary(g) % vertices.len()];
            let target = vertices[usize::arbitrary(g) % vertices.len()];
            let weight = Weight::from(u8::arbitrary(g) % 20);
            graph.add_edge(&source, &target, weight).unwrap();
        }

        for _ in 0..num_removals {
            if vertices.is_empty() {
                break;
            }
            let vertex = vertices[usize::arbitrary(g) % vertices.len()];
            if usize::arbitrary(g) % 2 == 0 {
                let _ = graph.remove_vertex(&vertex);
            } else {
                let other = vertices[usize::arbitrary(g) % vertices.len()];
                let _ = graph.remove_edge(&vertex, &other);
            }
        }

        ArbGraph { graph }
    }
}

/// Picks a vertex of the graph deterministically from `seed`, or `None` if
/// the graph is empty.
pub fn pick_vertex<V: Vertex + Ord>(graph: &Graph<V>, seed: usize) -> Option<V> {
    let mut vertices: Vec<&V> = graph.vertices().collect();
    vertices.sort();
    (!vertices.is_empty()).then(|| vertices[seed % vertices.len()].clone())
}

pub fn has_duplicates<T: Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Every stored `(source, target, weight)` triple, including both halves of
/// mirrored undirected edges.
pub fn edge_triples<V: Vertex + Ord>(graph: &Graph<V>) -> BTreeSet<(V, V, Weight)> {
    graph
        .vertices()
        .flat_map(|source| {
            graph
                .edges_from(source)
                .map(move |(target, weight)| (source.clone(), target.clone(), weight))
        })
        .collect()
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<V: Vertex + Ord>(graph: &Graph<V>) {
    for vertex in graph.vertices() {
        let adjacent = graph.get_adjacent(vertex).unwrap();
        assert!(!has_duplicates(&adjacent), "duplicate targets from {vertex:?}");
        for target in &adjacent {
            assert!(graph.contains_vertex(target), "dangling edge to {target:?}");
            let weight = graph.get_edge_weight(vertex, target);
            assert!(weight.is_some());
            if !graph.is_directed() {
                assert_eq!(graph.get_edge_weight(target, vertex), weight);
            }
        }
    }

    let triples = edge_triples(graph);
    if graph.is_directed() {
        assert_eq!(graph.num_edges(), triples.len());
    } else {
        let loops = triples.iter().filter(|(a, b, _)| a == b).count();
        assert_eq!(graph.num_edges() * 2 - loops, triples.len());
    }

    assert_eq!(graph.is_empty(), graph.num_vertices() == 0);
    assert_eq!(graph.get_vertices().len(), graph.num_vertices());
    assert!(graph.num_vertices() > 0 || graph.num_edges() == 0);
}
