use clap::ValueEnum;
use graphs::Graph;
use search::{
    bidirectional_dijkstra::BidirectionalDijkstra, dijkstra::Dijkstra, ShortestPathAlgorithm,
};

pub mod benchmark;
pub mod graphs;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmType {
    Dijkstra,
    Bidirectional,
}

pub fn algorithm<'a>(
    graph: &'a dyn Graph,
    algorithm_type: AlgorithmType,
) -> Box<dyn ShortestPathAlgorithm + 'a> {
    match algorithm_type {
        AlgorithmType::Dijkstra => Box::new(Dijkstra::new(graph)),
        AlgorithmType::Bidirectional => Box::new(BidirectionalDijkstra::new(graph)),
    }
}
