//! Nearest-neighbour construction of an initial visiting order.
//!
//! Greedy and O(n²); the result is refined by [`crate::two_opt`].

use crate::matrix::DistanceMatrix;

/// Visits the closest unvisited stop at every step, starting at `start`.
///
/// Ties go to the lowest index. An out-of-range `start` falls back to 0.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut current = if start < n { start } else { 0 };
    let mut visited = vec![false; n];
    visited[current] = true;

    let mut route = Vec::with_capacity(n);
    route.push(current);

    while route.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let dist = matrix.get(current, candidate);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((candidate, dist)),
            }
        }

        // Loop condition guarantees an unvisited index exists.
        let Some((next, _)) = best else { break };
        visited[next] = true;
        route.push(next);
        current = next;
    }

    route
}
