//! Single-crew pipeline and multi-crew planning.
//!
//! construct (nearest neighbour) → improve (2-opt) → adjust (priority and
//! fixed times) → schedule. Each call owns its matrix and route buffers, so
//! independent calls can run concurrently.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::OptimizerConfig;
use crate::constraints::adjust_for_constraints;
use crate::construct::nearest_neighbor;
use crate::error::{OptimizerError, Result};
use crate::haversine::{HaversineMatrix, haversine_miles};
use crate::matrix::DistanceMatrix;
use crate::polyline::Polyline;
use crate::schedule::{Schedule, generate_schedule};
use crate::traits::{DistanceMatrixProvider, RoundRobin, ZoneAssignment};
use crate::two_opt::two_opt;
use crate::types::{Crew, OptimizedRoute, Stop};
use crate::zones::ZoneTable;

/// Per-crew outcome. One crew failing never removes its siblings' routes.
pub type CrewPlan = BTreeMap<String, Result<OptimizedRoute>>;

/// Plans one crew's day with the haversine matrix.
pub fn optimize_route(stops: &[Stop], config: &OptimizerConfig) -> Result<OptimizedRoute> {
    optimize_route_with(stops, &HaversineMatrix::from_config(config), config)
}

pub fn optimize_route_with<M>(
    stops: &[Stop],
    matrix_provider: &M,
    config: &OptimizerConfig,
) -> Result<OptimizedRoute>
where
    M: DistanceMatrixProvider,
{
    config.validate()?;
    ensure_unique_ids(stops)?;
    run_pipeline(stops, config.start_index, matrix_provider, config)
}

/// Splits `stops` across `crews` by zone (round-robin) and plans each crew.
pub fn plan_crews(crews: &[Crew], stops: &[Stop], config: &OptimizerConfig) -> Result<CrewPlan> {
    plan_crews_with(
        crews,
        stops,
        &ZoneTable::default(),
        &RoundRobin,
        &HaversineMatrix::from_config(config),
        config,
    )
}

pub fn plan_crews_with<Z, M>(
    crews: &[Crew],
    stops: &[Stop],
    zones: &ZoneTable,
    assignment: &Z,
    matrix_provider: &M,
    config: &OptimizerConfig,
) -> Result<CrewPlan>
where
    Z: ZoneAssignment,
    M: DistanceMatrixProvider + Sync,
{
    config.validate()?;
    ensure_unique_ids(stops)?;
    if crews.is_empty() {
        if stops.is_empty() {
            return Ok(CrewPlan::new());
        }
        return Err(OptimizerError::EmptyCrewList);
    }

    let mut crew_ids = HashSet::new();
    for crew in crews {
        if crew.id.trim().is_empty() {
            return Err(OptimizerError::InvalidConfig {
                reason: "crew id must not be empty".to_string(),
            });
        }
        if !crew_ids.insert(crew.id.as_str()) {
            return Err(OptimizerError::InvalidConfig {
                reason: format!("duplicate crew id {:?}", crew.id),
            });
        }
    }

    let partition = zones.partition(stops);
    let assigned = assignment.assign(&partition, crews);
    check_assignment(&assigned, crews.len(), partition.len())?;
    debug!(
        crews = crews.len(),
        zones = partition.len(),
        stops = stops.len(),
        "zones partitioned"
    );

    let plans: Vec<(String, Result<OptimizedRoute>)> = crews
        .par_iter()
        .zip(assigned.par_iter())
        .map(|(crew, zone_indices)| {
            let crew_stops: Vec<Stop> = zone_indices
                .iter()
                .flat_map(|&zone_idx| partition[zone_idx].stop_indices.iter())
                .map(|&stop_idx| stops[stop_idx].clone())
                .collect();

            let result = crew
                .start
                .validate(None)
                .and_then(|()| nearest_stop_to(crew, &crew_stops, config))
                .and_then(|start| run_pipeline(&crew_stops, start, matrix_provider, config));

            match &result {
                Ok(route) => info!(
                    crew = %crew.id,
                    stops = route.stop_ids.len(),
                    miles = route.total_distance_miles,
                    "crew route planned"
                ),
                Err(err) => warn!(crew = %crew.id, error = %err, "crew route failed"),
            }

            (crew.id.clone(), result)
        })
        .collect();

    Ok(plans.into_iter().collect())
}

fn run_pipeline<M>(
    stops: &[Stop],
    start: usize,
    matrix_provider: &M,
    config: &OptimizerConfig,
) -> Result<OptimizedRoute>
where
    M: DistanceMatrixProvider,
{
    match stops.len() {
        0 => return Ok(OptimizedRoute::empty()),
        1 => {
            let route = [0];
            let schedule = generate_schedule(&route, stops, &DistanceMatrix::empty(), config)?;
            return Ok(assemble(stops, &route, 0.0, schedule));
        }
        _ => {}
    }

    let locations: Vec<(f64, f64)> = stops.iter().map(Stop::location).collect();
    let matrix = matrix_provider.matrix_for(&locations)?;
    if matrix.len() != stops.len() {
        return Err(OptimizerError::InvalidConfig {
            reason: format!(
                "distance matrix has {} rows for {} stops",
                matrix.len(),
                stops.len()
            ),
        });
    }

    let initial = nearest_neighbor(&matrix, start);
    let improved = two_opt(&initial, &matrix, config.max_two_opt_passes);
    debug!(
        stops = stops.len(),
        initial_tour = matrix.tour_length(&initial),
        improved_tour = matrix.tour_length(&improved),
        "route constructed and improved"
    );

    let route = adjust_for_constraints(&improved, stops);
    let distance = matrix.path_length(&route);
    debug!(
        improved_path = matrix.path_length(&improved),
        adjusted_path = distance,
        "constraints applied"
    );

    let schedule = generate_schedule(&route, stops, &matrix, config)?;
    Ok(assemble(stops, &route, distance, schedule))
}

fn assemble(stops: &[Stop], route: &[usize], distance: f64, schedule: Schedule) -> OptimizedRoute {
    OptimizedRoute {
        stop_ids: route.iter().map(|&idx| stops[idx].id().to_string()).collect(),
        total_distance_miles: round_tenth(distance),
        total_time_minutes: schedule.total_minutes(),
        total_wait_minutes: schedule.wait_minutes,
        schedule: schedule.entries,
        path: Polyline::from_route(stops, route),
    }
}

fn round_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// Index of the stop closest to where the crew starts; ties → lowest index.
fn nearest_stop_to(crew: &Crew, stops: &[Stop], config: &OptimizerConfig) -> Result<usize> {
    let origin = crew.start.as_tuple();
    let mut best: Option<(usize, f64)> = None;
    for (idx, stop) in stops.iter().enumerate() {
        let dist = haversine_miles(origin, stop.location(), config.earth_radius_miles)?;
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    Ok(best.map(|(idx, _)| idx).unwrap_or(0))
}

fn ensure_unique_ids(stops: &[Stop]) -> Result<()> {
    let mut seen = HashSet::with_capacity(stops.len());
    for stop in stops {
        if !seen.insert(stop.id()) {
            return Err(OptimizerError::invalid_stop(stop.id(), "duplicate stop id"));
        }
    }
    Ok(())
}

fn check_assignment(assigned: &[Vec<usize>], crews: usize, zones: usize) -> Result<()> {
    if assigned.len() != crews {
        return Err(OptimizerError::InvalidConfig {
            reason: format!("zone assignment covers {} of {} crews", assigned.len(), crews),
        });
    }
    let mut seen = vec![false; zones];
    for &zone_idx in assigned.iter().flatten() {
        if zone_idx >= zones || seen[zone_idx] {
            return Err(OptimizerError::InvalidConfig {
                reason: format!("zone {zone_idx} assigned more than once or out of range"),
            });
        }
        seen[zone_idx] = true;
    }
    if let Some(missing) = seen.iter().position(|covered| !covered) {
        return Err(OptimizerError::InvalidConfig {
            reason: format!("zone {missing} not assigned to any crew"),
        });
    }
    Ok(())
}
