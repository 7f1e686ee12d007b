//! Closed 2D outline of the body the particles flow around.

use nalgebra::{Point2, Vector2};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("flat coordinate list has odd length {0}, expected x/y pairs")]
    OddCoordinateCount(usize),
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
}

/// A simple closed polygon in scene units.
///
/// The loop is implicitly closed: the last vertex connects back to the first.
/// Either winding order is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilPolygon {
    vertices: Vec<Point2<f64>>,
}

impl AirfoilPolygon {
    /// # Errors
    ///
    /// Fails when there are fewer than 3 vertices or any coordinate is NaN or
    /// infinite.
    pub fn new(vertices: Vec<Point2<f64>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        if let Some(idx) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(PolygonError::NonFiniteVertex(idx));
        }
        Ok(Self { vertices })
    }

    /// Builds a polygon from interleaved `[x0, y0, x1, y1, ...]` coordinates,
    /// the layout a browser hands over as a `Float64Array`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowfield::{AirfoilPolygon, PolygonError};
    ///
    /// let triangle = AirfoilPolygon::from_flat(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(triangle.len(), 3);
    ///
    /// assert_eq!(
    ///     AirfoilPolygon::from_flat(&[0.0, 0.0, 1.0]),
    ///     Err(PolygonError::OddCoordinateCount(3))
    /// );
    /// ```
    pub fn from_flat(coords: &[f64]) -> Result<Self, PolygonError> {
        if coords.len() % 2 != 0 {
            return Err(PolygonError::OddCoordinateCount(coords.len()));
        }
        let vertices = coords
            .chunks_exact(2)
            .map(|xy| Point2::new(xy[0], xy[1]))
            .collect();
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise winding
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Edges as `(start, end)` pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Edges with their unit normal pointing away from the interior.
    ///
    /// Zero-length edges are skipped.
    pub fn outward_edges(
        &self,
    ) -> impl Iterator<Item = (Point2<f64>, Point2<f64>, Vector2<f64>)> + '_ {
        // Right-hand normal points outward for counter-clockwise loops
        let sign = if self.is_counter_clockwise() { 1.0 } else { -1.0 };
        self.edges().filter_map(move |(start, end)| {
            let d = end - start;
            let len = d.magnitude();
            (len > f64::EPSILON).then(|| (start, end, Vector2::new(d.y, -d.x) * (sign / len)))
        })
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| (b - a).magnitude()).sum()
    }
}
