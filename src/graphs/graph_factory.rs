use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use tracing::info;

use super::{
    edge::WeightedEdge,
    reversible_vec_graph::ReversibleVecGraph,
    vertex::{euclidean_distance, Vertex},
    Graph, GraphError, VertexId, Weight,
};
use crate::utility::get_progressspinner;

/// Builds graphs from cartesian graph files.
///
/// The format is line based. Lines starting with `#` and empty lines are
/// skipped. The first line holds the number of vertices `n`, the next `n`
/// lines the coordinates `x y` of vertex `0..n`, and every remaining line an
/// undirected edge `u v`. Edge weights are computed from the coordinates of
/// the endpoints.
pub struct GraphFactory<F = fn(&Vertex, &Vertex) -> Weight> {
    weight_function: F,
}

impl Default for GraphFactory {
    fn default() -> Self {
        GraphFactory {
            weight_function: euclidean_distance,
        }
    }
}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<ReversibleVecGraph, GraphError> {
        GraphFactory::default().read_file(path)
    }
}

impl<F> GraphFactory<F>
where
    F: Fn(&Vertex, &Vertex) -> Weight,
{
    pub fn with_weight_function(weight_function: F) -> GraphFactory<F> {
        GraphFactory { weight_function }
    }

    pub fn read_file(&self, path: &Path) -> Result<ReversibleVecGraph, GraphError> {
        let spinner = get_progressspinner("Reading graph");
        let reader = BufReader::new(File::open(path)?);
        let graph = self.read(reader)?;
        spinner.finish_and_clear();

        info!(
            path = %path.display(),
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "read graph"
        );
        Ok(graph)
    }

    pub fn read<R: BufRead>(&self, reader: R) -> Result<ReversibleVecGraph, GraphError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| match line {
                Ok(line) => {
                    let line = line.trim();
                    !line.is_empty() && !line.starts_with('#')
                }
                Err(_) => true,
            });

        let (line_number, line) = lines.next().ok_or_else(|| GraphError::Parse {
            line: 0,
            message: "missing number of vertices".to_string(),
        })?;
        let number_of_vertices: u32 = parse_value(line?.trim(), line_number, "number of vertices")?;

        let mut last_line_number = line_number;
        let mut vertices = Vec::with_capacity(number_of_vertices as usize);
        for id in 0..number_of_vertices {
            let (line_number, line) = lines.next().ok_or_else(|| GraphError::Parse {
                line: last_line_number,
                message: format!("expected {} vertices, found {}", number_of_vertices, id),
            })?;
            last_line_number = line_number;
            let line = line?;
            let [x, y] = parse_pair::<i32>(&line, line_number, "coordinate")?;
            vertices.push(Vertex::new(id, x, y));
        }

        let mut graph = ReversibleVecGraph::new(vertices)?;
        for (line_number, line) in lines {
            let line = line?;
            let [tail, head] = parse_pair::<VertexId>(&line, line_number, "vertex id")?;
            let vertices = graph.vertices();
            let (Some(tail_vertex), Some(head_vertex)) =
                (vertices.get(tail as usize), vertices.get(head as usize))
            else {
                let vertex = if graph.contains_vertex(tail) { head } else { tail };
                return Err(GraphError::UnknownVertex {
                    vertex,
                    number_of_vertices,
                });
            };
            let weight = (self.weight_function)(tail_vertex, head_vertex);

            // self loops carry no information for shortest paths
            if let Some(edge) = WeightedEdge::new(tail, head, weight) {
                graph.add_undirected_edge(&edge)?;
            }
        }

        Ok(graph)
    }
}

fn parse_value<T: FromStr>(value: &str, line: usize, what: &str) -> Result<T, GraphError> {
    value.parse().map_err(|_| GraphError::Parse {
        line,
        message: format!("unable to parse {} '{}'", what, value),
    })
}

/// Parses a line of exactly two whitespace separated values.
fn parse_pair<T: FromStr>(line: &str, line_number: usize, what: &str) -> Result<[T; 2], GraphError> {
    let wrong_count = || GraphError::Parse {
        line: line_number,
        message: format!("expected two values in '{}'", line),
    };

    let mut values = line.split_whitespace();
    let first = values.next().ok_or_else(wrong_count)?;
    let second = values.next().ok_or_else(wrong_count)?;
    if values.next().is_some() {
        return Err(wrong_count());
    }

    Ok([
        parse_value(first, line_number, what)?,
        parse_value(second, line_number, what)?,
    ])
}
