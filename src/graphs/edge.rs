use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// Directed edge between two distinct vertices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    /// Self loops never lie on a shortest path and are rejected.
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> Option<WeightedEdge> {
        if tail == head {
            return None;
        }

        Some(WeightedEdge { tail, head, weight })
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Swaps tail and head, the weight stays the same.
    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn headless(&self) -> HeadlessEdge {
        HeadlessEdge {
            tail: self.tail,
            weight: self.weight,
        }
    }
}

/// Entry of an out-adjacency list, the tail is the list's owner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaillessEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessEdge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Entry of an in-adjacency list, the head is the list's owner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadlessEdge {
    tail: VertexId,
    weight: Weight,
}

impl HeadlessEdge {
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_head(&self, head: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail: self.tail,
            head,
            weight: self.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedEdge;

    #[test]
    fn self_loops_are_rejected() {
        assert_eq!(WeightedEdge::new(3, 3, 1), None);
        assert!(WeightedEdge::new(3, 4, 0).is_some());
    }

    #[test]
    fn storage_forms_restore_the_edge() {
        let edge = WeightedEdge::new(1, 2, 7).unwrap();
        assert_eq!(edge.tailless().set_tail(1), edge);
        assert_eq!(edge.headless().set_head(2), edge);

        let reversed = edge.reversed();
        assert_eq!((reversed.tail(), reversed.head(), reversed.weight()), (2, 1, 7));
    }
}
