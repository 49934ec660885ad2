use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// A vertex embedded in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(id: VertexId, x: i32, y: i32) -> Vertex {
        Vertex { id, x, y }
    }
}

/// Straight-line distance between two vertices, rounded to the nearest
/// integer.
pub fn euclidean_distance(tail: &Vertex, head: &Vertex) -> Weight {
    let dx = (i64::from(tail.x) - i64::from(head.x)) as f64;
    let dy = (i64::from(tail.y) - i64::from(head.y)) as f64;
    dx.hypot(dy).round() as Weight
}
