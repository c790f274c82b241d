use crate::{Graph, Weight};

/// Generates a large graph with an irregular structure.  Vertices are the
/// integers `0..n`; `new_weight` is called with consecutive edge indices to
/// produce each edge's weight.
///
/// The graph structure includes:
/// - Cluster 1: Dense cluster (50 vertices, ~60% connectivity)
/// - Cluster 2: Medium cluster (80 vertices, ~30% connectivity)
/// - Cluster 3: Large sparse cluster (150 vertices, ~8% connectivity)
/// - Hub vertices (20 vertices with many connections)
/// - Bridge vertices connecting clusters (10 vertices)
/// - Long-range connections, reciprocal pairs and self loops
/// - Isolated vertices (10 vertices with no edges)
///
/// Edges that land on an existing pair replace it, so the edge count depends
/// on the graph's directedness.
pub fn generate_large_graph<F>(graph: &mut Graph<usize>, mut new_weight: F)
where
    F: FnMut(usize) -> Weight,
{
    let mut edge_counter = 0;
    let mut add_edge = |graph: &mut Graph<usize>, from: usize, to: usize| {
        graph.insert_edge(&from, &to, new_weight(edge_counter));
        edge_counter += 1;
    };

    let mut next_vertex = 0;
    let mut add_vertices = |graph: &mut Graph<usize>, count: usize| {
        let start = next_vertex;
        for v in start..start + count {
            graph.insert_vertex(v);
        }
        next_vertex += count;
        start..next_vertex
    };

    // Cluster 1: dense
    let cluster1 = add_vertices(graph, 50);
    for i in cluster1.clone() {
        for j in (i + 1)..cluster1.end {
            if (i * 7 + j * 11) % 10 < 6 {
                add_edge(graph, i, j);
            }
        }
    }

    // Cluster 2: moderately connected
    let cluster2 = add_vertices(graph, 80);
    for i in cluster2.clone() {
        for j in (i + 1)..cluster2.end {
            if (i * 13 + j * 17) % 10 < 3 {
                add_edge(graph, i, j);
            }
        }
    }

    // Cluster 3: sparse
    let cluster3 = add_vertices(graph, 150);
    for i in cluster3.clone() {
        for j in (i + 1)..cluster3.end {
            if (i * 19 + j * 23) % 100 < 8 {
                add_edge(graph, i, j);
            }
        }
    }

    // Hubs connect to many earlier vertices
    let hubs = add_vertices(graph, 20);
    for hub in hubs.clone() {
        for i in 0..hub {
            if (hub * 29 + i * 31) % 7 < 4 {
                add_edge(graph, hub, i);
            }
        }
    }

    // Bridges between the clusters
    let bridges = add_vertices(graph, 10);
    for (i, bridge) in bridges.clone().enumerate() {
        add_edge(graph, bridge, cluster1.start + (i * 47) % cluster1.len());
        add_edge(graph, bridge, cluster2.start + (i * 53) % cluster2.len());
        add_edge(graph, bridge, cluster3.start + (i * 59) % cluster3.len());
    }

    let connected = bridges.end;

    // Long-range connections
    for i in 0..200 {
        let from = (i * 61) % connected;
        let to = (i * 67 + 100) % connected;
        if from != to {
            add_edge(graph, from, to);
        }
    }

    // Reciprocal pairs
    for i in 0..50 {
        let a = (i * 73 + 7) % connected;
        let b = (i * 79 + 11) % connected;
        if a != b {
            add_edge(graph, a, b);
            add_edge(graph, b, a);
        }
    }

    // Self loops
    for i in 0..50 {
        let v = (i * 71) % connected;
        add_edge(graph, v, v);
    }

    add_vertices(graph, 10);
}

/// Generates a directed path `0 -> 1 -> ... -> len - 1` with unit weights,
/// deep enough to overflow the call stack of a recursive traversal.
pub fn generate_chain(len: usize) -> Graph<usize> {
    let mut graph = Graph::directed();
    for v in 0..len {
        graph.insert_vertex(v);
    }
    for v in 1..len {
        graph.insert_edge(&(v - 1), &v, 1);
    }
    graph
}
