//! Intra-route 2-opt local search.
//!
//! ```text
//! BEFORE:  (r[i-1]) --x--> [r[i]] -> ... -> [r[j]] --x--> (r[j+1 mod n])
//! AFTER:   (r[i-1]) -----> [r[j]] -> ... -> [r[i]] -----> (r[j+1 mod n])
//! ```
//!
//! Position 0 anchors the route: it is never part of a reversed segment, so
//! every legal move has `1 <= i < j < n`. The edge after `r[j]` wraps back to
//! `r[0]` when `j == n - 1`, which means moves are judged on the closed
//! tour even though the itinerary is driven as an open path.

use tracing::warn;

use crate::matrix::DistanceMatrix;

/// Improves `route` until a full sweep finds no strictly shorter reversal,
/// or `max_passes` sweeps have run.
///
/// The returned route never has a larger [`DistanceMatrix::tour_length`]
/// than the input.
pub fn two_opt(route: &[usize], matrix: &DistanceMatrix, max_passes: usize) -> Vec<usize> {
    let mut current = route.to_vec();
    let n = current.len();
    if n < 3 {
        return current;
    }

    let mut passes = 0;
    loop {
        if passes == max_passes {
            warn!(passes, stops = n, "2-opt pass limit reached");
            break;
        }
        passes += 1;

        let mut improved = false;
        for i in 1..n - 1 {
            for j in (i + 1)..n {
                let prev = current[i - 1];
                let next = current[(j + 1) % n];

                let existing = matrix.get(prev, current[i]) + matrix.get(current[j], next);
                let reversed = matrix.get(prev, current[j]) + matrix.get(current[i], next);

                if reversed < existing {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    current
}
