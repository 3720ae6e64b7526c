//! Priority and time-window policy applied after geometric optimization.
//!
//! Committed appointment times and high-priority jobs win over mileage, so
//! this pass may undo some of the 2-opt gains.

use crate::types::{Priority, Stop};

/// Reorders `route` (indices into `stops`) into three bands:
///
/// 1. high-priority stops, in their current relative order;
/// 2. other stops with a fixed requested time, ascending by that time
///    (ties keep their current order);
/// 3. the remaining flexible stops, in their current order.
///
/// When no stop is high priority and none has a fixed time the route comes
/// back unchanged.
pub fn adjust_for_constraints(route: &[usize], stops: &[Stop]) -> Vec<usize> {
    let mut high = Vec::new();
    let mut fixed = Vec::new();
    let mut flexible = Vec::new();

    for &idx in route {
        let stop = &stops[idx];
        if stop.priority() == Priority::High {
            high.push(idx);
        } else if stop.requested_time().is_fixed() {
            fixed.push(idx);
        } else {
            flexible.push(idx);
        }
    }

    if high.is_empty() && fixed.is_empty() {
        return route.to_vec();
    }

    // Stable, so equal times keep their geometric order.
    fixed.sort_by_key(|&idx| stops[idx].requested_time());

    high.into_iter().chain(fixed).chain(flexible).collect()
}
