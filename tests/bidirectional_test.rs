use bidirectional_paths::{
    graphs::{edge::WeightedEdge, reversible_vec_graph::ReversibleVecGraph, Graph},
    search::{
        bidirectional_dijkstra::BidirectionalDijkstra, dijkstra::Dijkstra, SearchError,
        ShortestPathAlgorithm,
    },
};

fn edge(tail: u32, head: u32, weight: u32) -> WeightedEdge {
    WeightedEdge::new(tail, head, weight).unwrap()
}

fn get_four_vertex_graph() -> ReversibleVecGraph {
    ReversibleVecGraph::from_edges(
        4,
        &[edge(0, 1, 1), edge(1, 2, 2), edge(0, 2, 5), edge(2, 3, 1)],
    )
    .unwrap()
}

fn get_small_graph() -> ReversibleVecGraph {
    // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
    let mut graph = ReversibleVecGraph::with_number_of_vertices(11);
    for (tail, head, weight) in [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ] {
        graph
            .add_undirected_edge(&edge(tail, head, weight))
            .unwrap();
    }
    graph
}

fn get_line_graph(number_of_vertices: u32) -> ReversibleVecGraph {
    let mut graph = ReversibleVecGraph::with_number_of_vertices(number_of_vertices);
    for tail in 1..number_of_vertices {
        graph.add_undirected_edge(&edge(tail - 1, tail, 1)).unwrap();
    }
    graph
}

fn get_grid_graph(width: u32) -> ReversibleVecGraph {
    let mut graph = ReversibleVecGraph::with_number_of_vertices(width * width);
    for y in 0..width {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_undirected_edge(&edge(vertex, vertex + 1, 1)).unwrap();
            }
            if y + 1 < width {
                graph
                    .add_undirected_edge(&edge(vertex, vertex + width, 1))
                    .unwrap();
            }
        }
    }
    graph
}

fn assert_same_result(graph: &dyn Graph, source: u32, target: u32) {
    let mut dijkstra = Dijkstra::new(graph);
    let mut bidirectional = BidirectionalDijkstra::new(graph);
    dijkstra.run(source, target).unwrap();
    bidirectional.run(source, target).unwrap();

    match (dijkstra.shortest_path(), bidirectional.shortest_path()) {
        (Ok(expected), Ok(path)) => {
            assert_eq!(path.total_weight(), expected.total_weight());
            assert_eq!(bidirectional.shortest_path_length(), Some(path.total_weight()));
            assert_eq!(path.source(), Some(source));
            assert_eq!(path.target(), Some(target));

            let edges: Vec<_> = path.edges().collect();
            assert!(edges
                .windows(2)
                .all(|pair| pair[0].head() == pair[1].tail()));
            assert!(edges.iter().all(|path_edge| graph
                .out_edges(path_edge.tail())
                .any(|graph_edge| &graph_edge == *path_edge)));
        }
        (Err(SearchError::NoPathFound { .. }), Err(SearchError::NoPathFound { .. })) => {}
        (expected, found) => panic!(
            "{} -> {}: dijkstra returned {:?}, bidirectional dijkstra {:?}",
            source, target, expected, found
        ),
    }
}

#[test]
fn prefers_lighter_detour() {
    let graph = get_four_vertex_graph();
    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    bidirectional.run(0, 3).unwrap();

    let path = bidirectional.shortest_path().unwrap();
    assert_eq!(
        path.edges().cloned().collect::<Vec<_>>(),
        vec![edge(0, 1, 1), edge(1, 2, 2), edge(2, 3, 1)]
    );
    assert_eq!(path.total_weight(), 4);
    assert_eq!(path.node_count(), 4);
}

#[test]
fn directed_graph_uses_incoming_edges() {
    let graph =
        ReversibleVecGraph::from_edges(3, &[edge(0, 1, 1), edge(1, 2, 1), edge(2, 0, 1)]).unwrap();

    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    bidirectional.run(2, 1).unwrap();
    let path = bidirectional.shortest_path().unwrap();
    assert_eq!(path.vertices(), vec![2, 0, 1]);

    for source in 0..3 {
        for target in 0..3 {
            assert_same_result(&graph, source, target);
        }
    }
}

#[test]
fn isolated_vertex_is_unreachable() {
    let mut graph = ReversibleVecGraph::with_number_of_vertices(6);
    for (tail, head) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)] {
        graph.add_undirected_edge(&edge(tail, head, 2)).unwrap();
    }

    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    for source in 0..5 {
        bidirectional.run(source, 5).unwrap();
        assert_eq!(
            bidirectional.shortest_path(),
            Err(SearchError::NoPathFound {
                from: source,
                to: 5
            })
        );
        assert_eq!(bidirectional.shortest_path_length(), None);

        bidirectional.run(5, source).unwrap();
        assert_eq!(
            bidirectional.shortest_path(),
            Err(SearchError::NoPathFound {
                from: 5,
                to: source
            })
        );
    }
}

#[test]
fn same_source_and_target() {
    let graph = get_small_graph();
    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    bidirectional.run(7, 7).unwrap();

    let path = bidirectional.shortest_path().unwrap();
    assert!(path.is_empty());
    assert_eq!(path.total_weight(), 0);
    assert_eq!(path.node_count(), 1);
    assert_eq!(path.vertices(), vec![7]);
}

#[test]
fn invalid_vertices_are_rejected() {
    let graph = get_four_vertex_graph();
    let mut bidirectional = BidirectionalDijkstra::new(&graph);

    assert_eq!(
        bidirectional.shortest_path(),
        Err(SearchError::NotInitialized)
    );
    assert_eq!(
        bidirectional.run(4, 0),
        Err(SearchError::InvalidVertex {
            vertex: 4,
            number_of_vertices: 4
        })
    );
    assert_eq!(
        bidirectional.run(0, 10),
        Err(SearchError::InvalidVertex {
            vertex: 10,
            number_of_vertices: 4
        })
    );
    // a failed run leaves no result behind
    assert_eq!(
        bidirectional.shortest_path(),
        Err(SearchError::NotInitialized)
    );
}

#[test]
fn matches_dijkstra_for_all_pairs() {
    let graph = get_small_graph();
    for source in 0..graph.number_of_vertices() {
        for target in 0..graph.number_of_vertices() {
            assert_same_result(&graph, source, target);
        }
    }
}

#[test]
fn line_costs_at_most_one_extra_settle() {
    let graph = get_line_graph(1000);

    let mut dijkstra = Dijkstra::new(&graph);
    dijkstra.run(0, 999).unwrap();
    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    bidirectional.run(0, 999).unwrap();

    assert_eq!(dijkstra.shortest_path().unwrap().total_weight(), 999);
    assert_eq!(bidirectional.shortest_path().unwrap().total_weight(), 999);
    assert_eq!(bidirectional.shortest_path().unwrap().node_count(), 1000);
    // the meeting vertex is settled by both searches
    assert!(bidirectional.settled_count() <= dijkstra.state().settled_count() + 1);
    assert!(bidirectional.iterations() <= dijkstra.iterations() + 1);
}

#[test]
fn settles_fewer_vertices_on_a_grid() {
    let graph = get_grid_graph(31);
    let source = 15 * 31 + 10;
    let target = 15 * 31 + 20;

    let mut dijkstra = Dijkstra::new(&graph);
    dijkstra.run(source, target).unwrap();
    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    bidirectional.run(source, target).unwrap();

    assert_eq!(dijkstra.shortest_path().unwrap().total_weight(), 10);
    assert_eq!(bidirectional.shortest_path().unwrap().total_weight(), 10);
    assert!(bidirectional.settled_count() < dijkstra.state().settled_count());
    assert!(bidirectional.iterations() < dijkstra.iterations());
}

#[test]
fn alternates_between_directions() {
    let graph = get_line_graph(100);
    let mut bidirectional = BidirectionalDijkstra::new(&graph);
    bidirectional.run(0, 99).unwrap();

    let forward = bidirectional.forward().iterations();
    let backward = bidirectional.backward().iterations();
    assert!(forward == backward || forward == backward + 1);
}

#[test]
fn rerun_is_idempotent() {
    let graph = get_small_graph();
    let mut bidirectional = BidirectionalDijkstra::new(&graph);

    bidirectional.run(1, 6).unwrap();
    let first_path = bidirectional.shortest_path().unwrap();
    let first_iterations = bidirectional.iterations();

    bidirectional.run(10, 4).unwrap();
    bidirectional.run(1, 6).unwrap();

    assert_eq!(bidirectional.shortest_path().unwrap(), first_path);
    assert_eq!(bidirectional.iterations(), first_iterations);
}

#[test]
fn name() {
    let graph = get_four_vertex_graph();
    assert_eq!(
        BidirectionalDijkstra::new(&graph).name(),
        "Bidirectional Dijkstra"
    );
}
