use crate::{
    graph::Graph,
    vertex::{Vertex, Weight},
};

/// Utility for copying graphs, optionally changing directedness and
/// transforming edge weights along the way.  Uses a builder pattern:
///
/// ```
/// # use weighted_graph::{Graph, GraphCopier};
/// let mut source = Graph::undirected();
/// source.add_vertex("A")?;
/// source.add_vertex("B")?;
/// source.add_edge(&"A", &"B", 2)?;
///
/// let doubled = GraphCopier::new(&source)
///     .with_directedness(true)
///     .transform_weights(|w| w * 2)
///     .copy();
/// assert_eq!(doubled.get_edge_weight(&"B", &"A"), Some(4));
/// # Ok::<(), weighted_graph::GraphError>(())
/// ```
///
/// When a directed graph is copied into an undirected one, the edges `a → b`
/// and `b → a` collapse into a single edge; if their weights differ, the
/// smaller weight is kept.
pub struct GraphCopier<'g, V, F> {
    /// The graph to copy from.
    source: &'g Graph<V>,
    /// The directedness of the graph created by [`Self::copy`].  Ignored by
    /// [`Self::copy_into`], which keeps the target's directedness.
    directed: bool,
    weight_transformer: F,
}

impl<'g, V> GraphCopier<'g, V, fn(Weight) -> Weight>
where
    V: Vertex,
{
    /// Creates a copier that preserves the source's directedness and weights.
    pub fn new(source: &'g Graph<V>) -> Self {
        Self {
            source,
            directed: source.is_directed(),
            weight_transformer: |weight| weight,
        }
    }
}

impl<'g, V, F> GraphCopier<'g, V, F>
where
    V: Vertex,
    F: FnMut(Weight) -> Weight,
{
    /// Sets the directedness of the graph created by [`Self::copy`].
    pub fn with_directedness(self, directed: bool) -> Self {
        Self { directed, ..self }
    }

    /// Sets a function applied to every edge weight as it is copied.
    pub fn transform_weights<F2>(self, weight_transformer: F2) -> GraphCopier<'g, V, F2>
    where
        F2: FnMut(Weight) -> Weight,
    {
        GraphCopier {
            source: self.source,
            directed: self.directed,
            weight_transformer,
        }
    }

    /// Copies the source into a new graph.
    pub fn copy(self) -> Graph<V> {
        let mut target = Graph::new(self.directed);
        self.copy_into(&mut target);
        target
    }

    /// Copies the source's vertices and edges into an existing graph.  Edges
    /// already in a directed `target` between the same vertices are replaced;
    /// an undirected `target` keeps the smaller of the two weights.
    pub fn copy_into(mut self, target: &mut Graph<V>) {
        for vertex in self.source.vertices() {
            target.insert_vertex(vertex.clone());
        }
        // Both halves of an undirected source edge are visited, so a directed
        // target receives both directions.
        for from in self.source.vertices() {
            for (to, weight) in self.source.edges_from(from) {
                let mut weight = (self.weight_transformer)(weight);
                if !target.is_directed() {
                    if let Some(existing) = target.get_edge_weight(to, from) {
                        weight = weight.min(existing);
                    }
                }
                target.insert_edge(from, to, weight);
            }
        }
    }
}

impl<V: Vertex> Graph<V> {
    /// Builds a new graph with the given directedness holding the same
    /// vertices and edges.  This is how a graph "changes" mode: the
    /// directedness of an existing graph never changes.
    pub fn copy_with_directedness(&self, directed: bool) -> Graph<V> {
        GraphCopier::new(self).with_directedness(directed).copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(directed: bool) -> Graph<&'static str> {
        let mut graph = Graph::new(directed);
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&"A", &"B", 1).unwrap();
        graph.add_edge(&"B", &"C", 2).unwrap();
        graph
    }

    #[test]
    fn test_copy_preserves_structure() {
        let source = sample(false);
        let copy = GraphCopier::new(&source).copy();
        assert!(!copy.is_directed());
        assert_eq!(copy.get_vertices(), source.get_vertices());
        assert_eq!(copy.num_edges(), 2);
        assert_eq!(copy.get_edge_weight(&"C", &"B"), Some(2));
        assert!(copy.contains_vertex(&"D"));
    }

    #[test]
    fn test_undirected_to_directed_keeps_both_directions() {
        let copy = sample(false).copy_with_directedness(true);
        assert!(copy.is_directed());
        assert_eq!(copy.get_edge_weight(&"A", &"B"), Some(1));
        assert_eq!(copy.get_edge_weight(&"B", &"A"), Some(1));
        assert_eq!(copy.get_adjacent(&"B").unwrap(), vec!["A", "C"]);
        assert_eq!(copy.get_adjacent(&"C").unwrap(), vec!["B"]);
        assert_eq!(copy.num_edges(), 4);
    }

    #[test]
    fn test_undirected_to_directed_keeps_self_loop_once() {
        let mut source = sample(false);
        source.add_edge(&"D", &"D", 3).unwrap();
        let copy = source.copy_with_directedness(true);
        assert_eq!(copy.get_adjacent(&"D").unwrap(), vec!["D"]);
        assert_eq!(copy.get_edge_weight(&"D", &"D"), Some(3));
        assert_eq!(copy.num_edges(), 5);
    }

    #[test]
    fn test_directed_to_undirected_mirrors_edges() {
        let copy = sample(true).copy_with_directedness(false);
        assert!(!copy.is_directed());
        assert_eq!(copy.get_adjacent(&"B").unwrap().len(), 2);
        assert_eq!(copy.get_edge_weight(&"B", &"A"), Some(1));
        assert_eq!(copy.num_edges(), 2);
    }

    #[test]
    fn test_directed_to_undirected_keeps_smaller_weight() {
        let mut source = sample(true);
        source.add_edge(&"B", &"A", 7).unwrap();
        source.add_edge(&"C", &"B", 1).unwrap();
        let copy = source.copy_with_directedness(false);
        assert_eq!(copy.get_edge_weight(&"A", &"B"), Some(1));
        assert_eq!(copy.get_edge_weight(&"B", &"A"), Some(1));
        assert_eq!(copy.get_edge_weight(&"B", &"C"), Some(1));
        assert_eq!(copy.num_edges(), 2);
    }

    #[test]
    fn test_round_trip_undirected() {
        let source = sample(false);
        let round_trip = source
            .copy_with_directedness(true)
            .copy_with_directedness(false);
        for edge in source.edges() {
            assert_eq!(
                round_trip.get_edge_weight(edge.source, edge.target),
                Some(edge.weight)
            );
        }
        assert_eq!(round_trip.num_edges(), source.num_edges());
    }

    #[test]
    fn test_copy_into_existing_graph() {
        let source = sample(true);
        let mut target = Graph::directed();
        target.add_vertex("Z").unwrap();
        GraphCopier::new(&source)
            .transform_weights(|w| w + 10)
            .copy_into(&mut target);
        assert_eq!(target.num_vertices(), 5);
        assert_eq!(target.get_edge_weight(&"A", &"B"), Some(11));
    }
}
