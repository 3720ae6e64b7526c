//! Straight-line route geometry handed to the itinerary renderer.
//!
//! Points are the stop coordinates in visiting order. Encoding into a compact
//! polyline string happens at the rendering boundary, not here.

use serde::{Deserialize, Serialize};

use crate::types::Stop;

/// Visiting-order geometry as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Wraps already-ordered points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Builds the geometry for `route`, a permutation of indices into `stops`.
    pub fn from_route(stops: &[Stop], route: &[usize]) -> Self {
        Self {
            points: route.iter().map(|&idx| stops[idx].location()).collect(),
        }
    }

    /// Points in visiting order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the polyline, returning its points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}
