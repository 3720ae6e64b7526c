//! crew-router
//!
//! Plans visiting order and schedules for home-services field crews.

pub mod error;
pub mod config;
pub mod types;
pub mod traits;
pub mod matrix;
pub mod haversine;
pub mod construct;
pub mod two_opt;
pub mod constraints;
pub mod schedule;
pub mod zones;
pub mod polyline;
pub mod solver;

pub use config::OptimizerConfig;
pub use error::{OptimizerError, Result};
pub use solver::{CrewPlan, optimize_route, plan_crews};
pub use types::{Coordinates, Crew, OptimizedRoute, Priority, RequestedTime, ScheduleEntry, Stop};
