//! Error taxonomy for the route optimizer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OptimizerError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// Non-finite or out-of-range latitude/longitude.
    #[error("invalid {field} {value}{}", stop_suffix(.stop_id))]
    InvalidCoordinate {
        stop_id: Option<String>,
        field: &'static str,
        value: f64,
    },

    #[error("invalid stop {stop_id:?}: {reason}")]
    InvalidStop { stop_id: String, reason: String },

    /// Multi-crew planning was asked to place stops but no crews were provided.
    #[error("no crews provided for a non-empty stop list")]
    EmptyCrewList,

    /// The day clock ran past midnight while scheduling this stop.
    #[error("schedule for stop {stop_id:?} runs past the end of the day")]
    ScheduleOverflow { stop_id: String },

    #[error("invalid optimizer configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl OptimizerError {
    pub(crate) fn invalid_stop(stop_id: &str, reason: impl Into<String>) -> Self {
        OptimizerError::InvalidStop {
            stop_id: stop_id.to_string(),
            reason: reason.into(),
        }
    }
}

fn stop_suffix(stop_id: &Option<String>) -> String {
    match stop_id {
        Some(id) => format!(" for stop {id:?}"),
        None => String::new(),
    }
}
