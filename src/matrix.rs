//! Square pairwise distance table for one optimization call.

/// Distances in miles, indexed by stop position in the input slice.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Wraps precomputed rows. Callers guarantee the table is square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// Length of the itinerary as driven: no leg back to the first stop.
    pub fn path_length(&self, route: &[usize]) -> f64 {
        route
            .windows(2)
            .map(|leg| self.get(leg[0], leg[1]))
            .sum()
    }

    /// Length of `route` treated as a closed tour (includes the return edge).
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        match (route.first(), route.last()) {
            (Some(&first), Some(&last)) if route.len() > 1 => {
                self.path_length(route) + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}
