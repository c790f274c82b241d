//! Component analysis, delegated to the `pathfinding` crate.
use std::collections::HashSet;

use crate::{graph::Graph, tracing_support::info_span, vertex::Vertex};

impl<V: Vertex> Graph<V> {
    /// Partitions the vertices into connected components, ignoring edge
    /// direction.  For a directed graph these are the weakly connected
    /// components.
    pub fn connected_components(&self) -> Vec<HashSet<V>> {
        let _span = info_span!("connected_components").entered();
        let vertices: Vec<&V> = self.vertices().collect();
        pathfinding::prelude::connected_components(&vertices, |vertex| {
            self.successors(vertex).collect::<Vec<_>>()
        })
        .into_iter()
        .map(|component| component.into_iter().cloned().collect())
        .collect()
    }

    /// Partitions the vertices into strongly connected components, following
    /// edge direction.  In an undirected graph these have the same members as
    /// [`Graph::connected_components`].
    pub fn strongly_connected_components(&self) -> Vec<Vec<V>> {
        let _span = info_span!("strongly_connected_components").entered();
        let vertices: Vec<&V> = self.vertices().collect();
        pathfinding::prelude::strongly_connected_components(&vertices, |vertex| {
            self.successors(vertex).collect::<Vec<_>>()
        })
        .into_iter()
        .map(|component| component.into_iter().cloned().collect())
        .collect()
    }
}
