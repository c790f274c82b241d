use std::{collections::HashMap, fmt::Debug};

use derivative::Derivative;

use crate::vertex::{Vertex, Weight};

/// The outgoing edges of a single vertex.
///
/// Edges are keyed by target, so there is at most one edge per target.  A
/// separate list remembers the order in which targets were inserted, which is
/// the order traversals follow.  Replacing an edge moves its target to the end
/// of that order.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Clone(bound = "V: Clone"),
    Debug(bound = "V: Debug")
)]
pub struct EdgeList<V> {
    weights: HashMap<V, Weight>,
    order: Vec<V>,
}

impl<V: Vertex> EdgeList<V> {
    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts an edge to `target`, replacing any existing edge to the same
    /// target.  Returns the replaced weight, if any.
    pub fn insert_or_replace(&mut self, target: V, weight: Weight) -> Option<Weight> {
        let replaced = self.weights.insert(target.clone(), weight);
        if replaced.is_some() {
            self.order.retain(|t| t != &target);
        }
        self.order.push(target);
        replaced
    }

    /// Removes the edge to `target`, returning its weight if it existed.
    pub fn remove(&mut self, target: &V) -> Option<Weight> {
        let removed = self.weights.remove(target);
        if removed.is_some() {
            self.order.retain(|t| t != target);
        }
        removed
    }

    /// Gets the weight of the edge to `target`.
    pub fn get(&self, target: &V) -> Option<Weight> {
        self.weights.get(target).copied()
    }

    pub fn contains(&self, target: &V) -> bool {
        self.weights.contains_key(target)
    }

    /// Iterates over edge targets in insertion order.
    pub fn targets(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    /// Iterates over `(target, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.order.iter().map(|target| (target, self.weights[target]))
    }
}
