//! Seams where a different strategy can be plugged in without touching the
//! single-crew pipeline.

use crate::error::Result;
use crate::matrix::DistanceMatrix;
use crate::types::Crew;
use crate::zones::Zone;

/// Provides a distance matrix (miles) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<DistanceMatrix>;
}

/// Decides which zones each crew works.
///
/// Returns one entry per crew, in `crews` order, holding indices into
/// `zones`. Every zone index must appear in exactly one entry.
pub trait ZoneAssignment: Sync {
    fn assign(&self, zones: &[Zone], crews: &[Crew]) -> Vec<Vec<usize>>;
}

/// Crew `k` receives every zone whose partition position is `k` modulo the
/// crew count. Ignores where crews start from.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl ZoneAssignment for RoundRobin {
    fn assign(&self, zones: &[Zone], crews: &[Crew]) -> Vec<Vec<usize>> {
        let mut assignment = vec![Vec::new(); crews.len()];
        if crews.is_empty() {
            return assignment;
        }
        for zone_idx in 0..zones.len() {
            assignment[zone_idx % crews.len()].push(zone_idx);
        }
        assignment
    }
}
