use std::cmp::Reverse;

use keyed_priority_queue::KeyedPriorityQueue;

use super::search_record::SearchRecord;
use crate::graphs::{edge::WeightedEdge, Distance, VertexId};

/// Mutable priority queue over the search records of every vertex.
///
/// The queue owns the records. Extracted records stay accessible and are
/// marked settled, so another search can still look up their final distance.
/// Records are ordered by distance, ties go to the smaller vertex id.
#[derive(Clone)]
pub struct FrontierQueue {
    records: Vec<SearchRecord>,
    queue: KeyedPriorityQueue<VertexId, Reverse<(Distance, VertexId)>>,
}

impl FrontierQueue {
    pub fn new(number_of_vertices: u32) -> FrontierQueue {
        FrontierQueue {
            records: vec![SearchRecord::unreached(); number_of_vertices as usize],
            queue: KeyedPriorityQueue::new(),
        }
    }

    /// Resets every record and inserts all of them, `root` with distance 0.
    pub fn reset(&mut self, root: VertexId) {
        self.clear();
        self.records[root as usize] = SearchRecord::root();

        for vertex in 0..self.records.len() as VertexId {
            self.insert(vertex);
        }
    }

    /// Empties the queue and marks every vertex unreached.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.records.fill(SearchRecord::unreached());
    }

    pub fn insert(&mut self, vertex: VertexId) {
        let priority = Reverse((self.records[vertex as usize].key(), vertex));
        self.queue.push(vertex, priority);
    }

    /// Removes the record with the smallest distance and settles it.
    pub fn extract_min(&mut self) -> Option<VertexId> {
        let (vertex, _) = self.queue.pop()?;
        self.records[vertex as usize].settle();
        Some(vertex)
    }

    /// Restores the heap order after the distance of `vertex` decreased.
    pub fn decrease_priority(&mut self, vertex: VertexId) {
        let priority = Reverse((self.records[vertex as usize].key(), vertex));
        self.queue.push(vertex, priority);
    }

    /// Lowers the distance of `vertex` if `distance` improves it. Returns
    /// whether the record changed. Settled and unknown vertices are skipped.
    pub fn relax(&mut self, vertex: VertexId, distance: Distance, edge: WeightedEdge) -> bool {
        let Some(record) = self.records.get_mut(vertex as usize) else {
            return false;
        };
        if record.is_settled() || distance >= record.key() {
            return false;
        }

        record.update(distance, edge);
        self.decrease_priority(vertex);
        true
    }

    /// Looks at the record, not at queue membership.
    pub fn is_settled(&self, vertex: VertexId) -> bool {
        self.records
            .get(vertex as usize)
            .is_some_and(SearchRecord::is_settled)
    }

    pub fn record(&self, vertex: VertexId) -> Option<&SearchRecord> {
        self.records.get(vertex as usize)
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Number of records that have not been extracted yet.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FrontierQueue;
    use crate::graphs::edge::WeightedEdge;

    #[test]
    fn extracts_root_first_and_settles() {
        let mut queue = FrontierQueue::new(4);
        queue.reset(2);
        assert_eq!(queue.len(), 4);

        assert_eq!(queue.extract_min(), Some(2));
        assert!(queue.is_settled(2));
        assert!(!queue.is_settled(0));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.record(2).unwrap().distance(), Some(0));
    }

    #[test]
    fn relax_decreases_priority() {
        let mut queue = FrontierQueue::new(4);
        queue.reset(0);
        queue.extract_min();

        assert!(queue.relax(3, 10, WeightedEdge::new(0, 3, 10).unwrap()));
        assert!(queue.relax(1, 12, WeightedEdge::new(0, 1, 12).unwrap()));
        assert!(!queue.relax(3, 11, WeightedEdge::new(0, 3, 11).unwrap()));
        assert!(queue.relax(1, 4, WeightedEdge::new(0, 1, 4).unwrap()));

        assert_eq!(queue.extract_min(), Some(1));
        assert_eq!(queue.record(1).unwrap().predecessor(), Some(0));
        assert_eq!(queue.extract_min(), Some(3));
        // unreached vertices come last
        assert_eq!(queue.extract_min(), Some(2));
        assert_eq!(queue.record(2).unwrap().distance(), None);
        assert_eq!(queue.extract_min(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_go_to_smaller_vertex() {
        let mut queue = FrontierQueue::new(5);
        queue.reset(0);
        queue.extract_min();
        for vertex in [4, 2, 3] {
            queue.relax(vertex, 7, WeightedEdge::new(0, vertex, 7).unwrap());
        }

        assert_eq!(queue.extract_min(), Some(2));
        assert_eq!(queue.extract_min(), Some(3));
        assert_eq!(queue.extract_min(), Some(4));
    }

    #[test]
    fn settled_records_are_final() {
        let mut queue = FrontierQueue::new(3);
        queue.reset(0);
        queue.extract_min();
        queue.relax(1, 5, WeightedEdge::new(0, 1, 5).unwrap());
        queue.extract_min();

        assert!(!queue.relax(1, 1, WeightedEdge::new(2, 1, 1).unwrap()));
        assert_eq!(queue.record(1).unwrap().distance(), Some(5));
        assert!(!queue.relax(9, 1, WeightedEdge::new(2, 9, 1).unwrap()));
    }
}
