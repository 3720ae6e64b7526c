//! Test fixtures for crew-router.
//!
//! - Real Las Vegas valley service addresses
//! - A stop builder with sensible defaults

#![allow(dead_code)]

pub mod las_vegas_locations;

pub use las_vegas_locations::*;

use chrono::NaiveTime;
use crew_router::{Coordinates, Crew, Priority, RequestedTime, Stop};

/// Builder for test stops with sensible defaults.
#[derive(Clone, Debug)]
pub struct StopBuilder {
    id: String,
    location: (f64, f64),
    address: String,
    requested_time: RequestedTime,
    duration_min: u32,
    priority: Priority,
}

impl StopBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            location: (0.0, 0.0),
            address: String::new(),
            requested_time: RequestedTime::Flexible,
            duration_min: 30,
            priority: Priority::Normal,
        }
    }

    pub fn at(id: &str, place: &ServiceAddress) -> Self {
        Self::new(id).location(place.lat, place.lng).address(place.address)
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.location = (lat, lng);
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn requested(mut self, h: u32, m: u32) -> Self {
        self.requested_time = RequestedTime::Fixed(time(h, m));
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration_min = minutes;
        self
    }

    pub fn high(mut self) -> Self {
        self.priority = Priority::High;
        self
    }

    pub fn low(mut self) -> Self {
        self.priority = Priority::Low;
        self
    }

    pub fn build(self) -> Stop {
        Stop::new(
            self.id,
            Coordinates::new(self.location.0, self.location.1),
            self.address,
            self.requested_time,
            self.duration_min,
            self.priority,
        )
        .expect("fixture stop should be valid")
    }
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn crew(id: &str, start: (f64, f64)) -> Crew {
    Crew::new(id, Coordinates::new(start.0, start.1)).unwrap()
}

/// Every fixture address as a flexible, normal-priority, 20-minute stop.
pub fn valley_stops() -> Vec<Stop> {
    all_addresses()
        .iter()
        .enumerate()
        .map(|(i, place)| StopBuilder::at(&format!("job-{i:02}"), place).duration(20).build())
        .collect()
}

pub fn ids(stops: &[Stop]) -> Vec<String> {
    stops.iter().map(|stop| stop.id().to_string()).collect()
}
