use std::{collections::VecDeque, fmt};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{edge::WeightedEdge, Distance, VertexId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("cannot join path at vertex {expected} with a fragment at vertex {found}")]
    Discontinuous { expected: VertexId, found: VertexId },
}

/// Represents a path in a graph as an ordered sequence of edges.
///
/// The head of every edge is the tail of the following edge. A path without
/// edges may still be anchored at a vertex, which is how a path from a vertex
/// to itself is represented.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    edges: VecDeque<WeightedEdge>,
    anchor: Option<VertexId>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    /// The zero length path from `vertex` to itself.
    pub fn trivial(vertex: VertexId) -> Path {
        Path {
            edges: VecDeque::new(),
            anchor: Some(vertex),
        }
    }

    pub fn source(&self) -> Option<VertexId> {
        self.edges.front().map(WeightedEdge::tail).or(self.anchor)
    }

    pub fn target(&self) -> Option<VertexId> {
        self.edges.back().map(WeightedEdge::head).or(self.anchor)
    }

    pub fn push_front(&mut self, edge: WeightedEdge) -> Result<(), PathError> {
        check_join(edge.head(), self.source())?;
        self.edges.push_front(edge);
        self.anchor = None;
        Ok(())
    }

    pub fn push_back(&mut self, edge: WeightedEdge) -> Result<(), PathError> {
        check_join(edge.tail(), self.target())?;
        self.edges.push_back(edge);
        self.anchor = None;
        Ok(())
    }

    /// Prepends `path`, whose target has to be the source of this path.
    pub fn push_front_path(&mut self, path: Path) -> Result<(), PathError> {
        if let (Some(found), Some(expected)) = (path.target(), self.source()) {
            check_join(found, Some(expected))?;
        }
        let anchor = self.anchor.or(path.anchor);
        for edge in path.edges.into_iter().rev() {
            self.edges.push_front(edge);
        }
        self.set_anchor(anchor);
        Ok(())
    }

    /// Appends `path`, whose source has to be the target of this path.
    pub fn push_back_path(&mut self, path: Path) -> Result<(), PathError> {
        if let (Some(found), Some(expected)) = (path.source(), self.target()) {
            check_join(found, Some(expected))?;
        }
        let anchor = self.anchor.or(path.anchor);
        self.edges.extend(path.edges);
        self.set_anchor(anchor);
        Ok(())
    }

    // the anchor only identifies paths without edges
    fn set_anchor(&mut self, anchor: Option<VertexId>) {
        self.anchor = if self.edges.is_empty() { anchor } else { None };
    }

    /// Returns the path walked in the opposite direction, every edge has its
    /// endpoints swapped.
    pub fn reversed(&self) -> Path {
        Path {
            edges: self.edges.iter().rev().map(WeightedEdge::reversed).collect(),
            anchor: self.anchor,
        }
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = &WeightedEdge> + '_ {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> Distance {
        self.edges
            .iter()
            .map(|edge| Distance::from(edge.weight()))
            .sum()
    }

    /// Number of vertices on the path. A trivial path consists of its single
    /// vertex, an unanchored empty path of none.
    pub fn node_count(&self) -> usize {
        if self.edges.is_empty() {
            return usize::from(self.anchor.is_some());
        }
        self.edges.len() + 1
    }

    pub fn vertices(&self) -> Vec<VertexId> {
        self.source()
            .into_iter()
            .chain(self.edges.iter().map(WeightedEdge::head))
            .collect()
    }
}

fn check_join(found: VertexId, expected: Option<VertexId>) -> Result<(), PathError> {
    match expected {
        Some(expected) if expected != found => Err(PathError::Discontinuous { expected, found }),
        _ => Ok(()),
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total weight: {}",
            self.vertices().iter().join(" -> "),
            self.total_weight()
        )
    }
}
