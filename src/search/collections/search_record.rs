use crate::graphs::{edge::WeightedEdge, Distance, VertexId};

/// Per vertex state of a single search.
///
/// The predecessor vertex is the tail of the predecessor edge, so both are
/// always set together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRecord {
    distance: Distance,
    predecessor_edge: Option<WeightedEdge>,
    is_settled: bool,
}

impl Default for SearchRecord {
    fn default() -> Self {
        SearchRecord::unreached()
    }
}

impl SearchRecord {
    pub fn unreached() -> SearchRecord {
        SearchRecord {
            distance: Distance::MAX,
            predecessor_edge: None,
            is_settled: false,
        }
    }

    pub fn root() -> SearchRecord {
        SearchRecord {
            distance: 0,
            ..SearchRecord::unreached()
        }
    }

    /// Tentative distance, `None` while the vertex has not been reached.
    pub fn distance(&self) -> Option<Distance> {
        if self.distance == Distance::MAX {
            return None;
        }

        Some(self.distance)
    }

    /// Priority of the record, unreached records sort last.
    pub fn key(&self) -> Distance {
        self.distance
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor_edge.as_ref().map(WeightedEdge::tail)
    }

    pub fn predecessor_edge(&self) -> Option<&WeightedEdge> {
        self.predecessor_edge.as_ref()
    }

    pub fn is_settled(&self) -> bool {
        self.is_settled
    }

    pub(crate) fn update(&mut self, distance: Distance, predecessor_edge: WeightedEdge) {
        debug_assert!(!self.is_settled, "settled distances are final");
        self.distance = distance;
        self.predecessor_edge = Some(predecessor_edge);
    }

    pub(crate) fn settle(&mut self) {
        self.is_settled = true;
    }
}
