use super::Point;
use thiserror::Error;

/// Smallest vertex count that encloses an area
pub const MIN_VERTICES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolygonError {
    #[error("polygon needs at least {MIN_VERTICES} vertices, got {0}")]
    TooFewPoints(usize),
}

/// A closed polygon stored in traversal order.
///
/// The last point connects back to the first; the closing point is not repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, PolygonError> {
        if points.len() < MIN_VERTICES {
            return Err(PolygonError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn has_even_vertices(&self) -> bool {
        self.vertex_count() % 2 == 0
    }

    /// Unsigned area by the shoelace formula.
    ///
    /// Sums `x_i * y_(i+1) - y_i * x_(i+1)` over every edge, including the
    /// closing edge from the last point back to the first.
    pub fn area(&self) -> f64 {
        let open_edges: i128 = self
            .points
            .windows(2)
            .map(|pair| i128::from(pair[0].cross(&pair[1])))
            .sum();

        // points.len() >= 3, so first/last always exist
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        let closing = i128::from(last.cross(&first));

        0.5 * ((open_edges + closing).abs() as f64)
    }
}

impl TryFrom<Vec<(i32, i32)>> for Polygon {
    type Error = PolygonError;

    fn try_from(coords: Vec<(i32, i32)>) -> Result<Self, Self::Error> {
        Self::new(coords.into_iter().map(Point::from).collect())
    }
}
