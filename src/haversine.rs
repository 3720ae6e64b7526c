//! Great-circle distance and the haversine distance matrix provider.
//!
//! Straight-line distance stands in for road distance in both directions.
//! Less accurate than a routing provider but needs no network access.

use crate::config::{EARTH_RADIUS_MILES, OptimizerConfig};
use crate::error::{OptimizerError, Result};
use crate::matrix::DistanceMatrix;
use crate::traits::DistanceMatrixProvider;

/// Haversine distance in miles between two (lat, lng) points.
///
/// Fails on NaN or infinite input rather than returning a meaningless number.
pub fn haversine_miles(from: (f64, f64), to: (f64, f64), earth_radius_miles: f64) -> Result<f64> {
    for (field, value) in [
        ("latitude", from.0),
        ("longitude", from.1),
        ("latitude", to.0),
        ("longitude", to.1),
    ] {
        if !value.is_finite() {
            return Err(OptimizerError::InvalidCoordinate {
                stop_id: None,
                field,
                value,
            });
        }
    }

    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    Ok(earth_radius_miles * c)
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    pub earth_radius_miles: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            earth_radius_miles: EARTH_RADIUS_MILES,
        }
    }
}

impl HaversineMatrix {
    pub fn new(earth_radius_miles: f64) -> Self {
        Self { earth_radius_miles }
    }

    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self::new(config.earth_radius_miles)
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<DistanceMatrix> {
        let n = locations.len();
        let mut rows = vec![vec![0.0; n]; n];

        // Each pair once, mirrored; the diagonal stays zero.
        for i in 0..n {
            for j in (i + 1)..n {
                let miles = haversine_miles(locations[i], locations[j], self.earth_radius_miles)?;
                rows[i][j] = miles;
                rows[j][i] = miles;
            }
        }

        Ok(DistanceMatrix::from_rows(rows))
    }
}
