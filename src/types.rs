//! Domain records consumed and produced by the optimizer.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{OptimizerError, Result};
use crate::polyline::Polyline;

/// Latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Checks that both components are finite and inside the valid degree range.
    pub fn validate(&self, stop_id: Option<&str>) -> Result<()> {
        let invalid = |field, value| OptimizerError::InvalidCoordinate {
            stop_id: stop_id.map(str::to_string),
            field,
            value,
        };
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid("latitude", self.lat));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(invalid("longitude", self.lng));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Normal,
    Low,
}

/// When service may begin at a stop.
///
/// Variant order matters: every fixed time sorts before `Flexible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestedTime {
    Fixed(NaiveTime),
    Flexible,
}

impl RequestedTime {
    /// Parses `"HH:MM"`, `"HH:MM:SS"` or `"flexible"` (an empty string is
    /// also flexible). Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("flexible") {
            return Some(RequestedTime::Flexible);
        }
        hhmm::parse(raw).map(RequestedTime::Fixed)
    }

    pub fn fixed_time(&self) -> Option<NaiveTime> {
        match self {
            RequestedTime::Fixed(time) => Some(*time),
            RequestedTime::Flexible => None,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, RequestedTime::Fixed(_))
    }
}

impl fmt::Display for RequestedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedTime::Fixed(time) => write!(f, "{}", time.format(hhmm::FORMAT)),
            RequestedTime::Flexible => f.write_str("flexible"),
        }
    }
}

impl Serialize for RequestedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RequestedTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RequestedTime::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("malformed requested time {raw:?}")))
    }
}

/// One service appointment. Immutable once built; `Stop::new` is the only
/// way to obtain one, so every `Stop` in the pipeline is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StopRecord")]
pub struct Stop {
    id: String,
    coordinates: Coordinates,
    address: String,
    requested_time: RequestedTime,
    service_duration_minutes: u32,
    priority: Priority,
}

impl Stop {
    pub fn new(
        id: impl Into<String>,
        coordinates: Coordinates,
        address: impl Into<String>,
        requested_time: RequestedTime,
        service_duration_minutes: u32,
        priority: Priority,
    ) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(OptimizerError::invalid_stop(&id, "id must not be empty"));
        }
        coordinates.validate(Some(&id))?;
        if service_duration_minutes == 0 {
            return Err(OptimizerError::invalid_stop(
                &id,
                "service duration must be positive",
            ));
        }

        Ok(Self {
            id,
            coordinates,
            address: address.into(),
            requested_time,
            service_duration_minutes,
            priority,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn location(&self) -> (f64, f64) {
        self.coordinates.as_tuple()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn requested_time(&self) -> RequestedTime {
        self.requested_time
    }

    pub fn service_duration_minutes(&self) -> u32 {
        self.service_duration_minutes
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Wire shape of a stop before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StopRecord {
    id: String,
    coordinates: Coordinates,
    #[serde(default)]
    address: String,
    #[serde(default)]
    requested_time: Option<String>,
    service_duration_minutes: i64,
    #[serde(default = "default_priority")]
    priority: Priority,
}

fn default_priority() -> Priority {
    Priority::Normal
}

impl TryFrom<StopRecord> for Stop {
    type Error = OptimizerError;

    fn try_from(record: StopRecord) -> Result<Self> {
        let raw_time = record.requested_time.as_deref().unwrap_or("");
        let requested_time = RequestedTime::parse(raw_time).ok_or_else(|| {
            OptimizerError::invalid_stop(
                &record.id,
                format!("malformed requested time {raw_time:?}"),
            )
        })?;
        let duration = u32::try_from(record.service_duration_minutes)
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| {
                OptimizerError::invalid_stop(
                    &record.id,
                    format!(
                        "service duration must be positive, got {}",
                        record.service_duration_minutes
                    ),
                )
            })?;

        Stop::new(
            record.id,
            record.coordinates,
            record.address,
            requested_time,
            duration,
            record.priority,
        )
    }
}

/// A field crew and where it leaves from in the morning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    pub id: String,
    pub start: Coordinates,
}

impl Crew {
    pub fn new(id: impl Into<String>, start: Coordinates) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(OptimizerError::InvalidConfig {
                reason: "crew id must not be empty".to_string(),
            });
        }
        start.validate(None)?;
        Ok(Self { id, start })
    }
}

/// Timestamped visit in the final itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub stop_id: String,
    #[serde(with = "hhmm")]
    pub arrival_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub departure_time: NaiveTime,
    pub service_duration_minutes: u32,
}

/// Planning result for one crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub stop_ids: Vec<String>,
    /// Open-path length in miles, one decimal place.
    pub total_distance_miles: f64,
    /// Travel (including buffers) plus service, in minutes.
    pub total_time_minutes: u32,
    pub total_wait_minutes: u32,
    pub schedule: Vec<ScheduleEntry>,
    pub path: Polyline,
}

impl OptimizedRoute {
    pub fn empty() -> Self {
        Self {
            stop_ids: Vec::new(),
            total_distance_miles: 0.0,
            total_time_minutes: 0,
            total_wait_minutes: 0,
            schedule: Vec::new(),
            path: Polyline::new(Vec::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }
}

/// `"HH:MM"` wall-clock (de)serialization for `NaiveTime`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%H:%M";

    pub fn parse(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("expected HH:MM, got {raw:?}")))
    }
}
