//! Sequential arrival/departure computation for a fixed visiting order.
//!
//! Walks the route once with a running clock. It never reorders stops; a
//! fixed requested time later than the clock makes the crew wait.

use chrono::{NaiveTime, Timelike};

use crate::config::OptimizerConfig;
use crate::error::{OptimizerError, Result};
use crate::matrix::DistanceMatrix;
use crate::types::{ScheduleEntry, Stop};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Timestamped itinerary plus the totals derived while walking it.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    /// Driving time including the inter-stop buffers.
    pub travel_minutes: u32,
    pub service_minutes: u32,
    pub wait_minutes: u32,
}

impl Schedule {
    pub fn total_minutes(&self) -> u32 {
        self.travel_minutes.saturating_add(self.service_minutes)
    }
}

/// Whole minutes needed to drive `miles` at `speed_mph`, rounded up.
pub fn drive_minutes(miles: f64, speed_mph: f64) -> u32 {
    // Tolerance keeps exact multiples (e.g. 12.5 mi at 25 mph) from rounding up.
    let minutes = miles * 60.0 / speed_mph;
    (minutes - 1e-9).ceil().max(0.0) as u32
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

fn overflow(stop: &Stop) -> OptimizerError {
    OptimizerError::ScheduleOverflow {
        stop_id: stop.id().to_string(),
    }
}

fn add_minutes(lhs: u32, rhs: u32, stop: &Stop) -> Result<u32> {
    lhs.checked_add(rhs).ok_or_else(|| overflow(stop))
}

fn to_time(minute: u32, stop: &Stop) -> Result<NaiveTime> {
    if minute >= MINUTES_PER_DAY {
        return Err(overflow(stop));
    }
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).ok_or_else(|| overflow(stop))
}

/// Assigns arrival and departure times to `route` (indices into `stops`).
///
/// The first stop is reached at `config.day_start`; every later stop adds
/// the drive time from its predecessor plus the inter-stop buffer.
pub fn generate_schedule(
    route: &[usize],
    stops: &[Stop],
    matrix: &DistanceMatrix,
    config: &OptimizerConfig,
) -> Result<Schedule> {
    let mut entries = Vec::with_capacity(route.len());
    let mut clock = minute_of_day(config.day_start);
    let mut travel_minutes = 0;
    let mut service_minutes = 0;
    let mut wait_minutes = 0;

    for (position, &idx) in route.iter().enumerate() {
        let stop = &stops[idx];

        if position > 0 {
            let miles = matrix.get(route[position - 1], idx);
            let leg = add_minutes(
                drive_minutes(miles, config.average_speed_mph),
                config.inter_stop_buffer_minutes,
                stop,
            )?;
            clock = add_minutes(clock, leg, stop)?;
            travel_minutes = add_minutes(travel_minutes, leg, stop)?;
        }

        if let Some(requested) = stop.requested_time().fixed_time() {
            let requested = minute_of_day(requested);
            if requested > clock {
                wait_minutes += requested - clock;
                clock = requested;
            }
        }

        let arrival = clock;
        let departure = add_minutes(arrival, stop.service_duration_minutes(), stop)?;

        entries.push(ScheduleEntry {
            stop_id: stop.id().to_string(),
            arrival_time: to_time(arrival, stop)?,
            departure_time: to_time(departure, stop)?,
            service_duration_minutes: stop.service_duration_minutes(),
        });

        service_minutes = add_minutes(service_minutes, stop.service_duration_minutes(), stop)?;
        clock = departure;
    }

    Ok(Schedule {
        entries,
        travel_minutes,
        service_minutes,
        wait_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinates, Priority, RequestedTime};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn stop(id: &str, requested: RequestedTime, duration: u32) -> Stop {
        Stop::new(id, Coordinates::new(36.1, -115.1), "", requested, duration, Priority::Normal)
            .unwrap()
    }

    /// 0 -- 12.5 mi -- 1 -- 25 mi -- 2
    fn legs() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 12.5, 37.5],
            vec![12.5, 0.0, 25.0],
            vec![37.5, 25.0, 0.0],
        ])
    }

    #[test]
    fn test_drive_minutes() {
        assert_eq!(drive_minutes(12.5, 25.0), 30);
        assert_eq!(drive_minutes(12.6, 25.0), 31);
        assert_eq!(drive_minutes(0.0, 25.0), 0);
    }

    #[test]
    fn test_travel_buffer_and_service() {
        let stops = vec![
            stop("a", RequestedTime::Flexible, 60),
            stop("b", RequestedTime::Flexible, 45),
            stop("c", RequestedTime::Flexible, 30),
        ];
        let schedule =
            generate_schedule(&[0, 1, 2], &stops, &legs(), &OptimizerConfig::default()).unwrap();

        let times: Vec<_> = schedule
            .entries
            .iter()
            .map(|e| (e.stop_id.as_str(), e.arrival_time, e.departure_time))
            .collect();
        assert_eq!(
            times,
            vec![
                ("a", at(8, 0), at(9, 0)),
                // 30 min drive + 10 min buffer
                ("b", at(9, 40), at(10, 25)),
                // 60 min drive + 10 min buffer
                ("c", at(11, 35), at(12, 5)),
            ]
        );
        assert_eq!(schedule.travel_minutes, 110);
        assert_eq!(schedule.service_minutes, 135);
        assert_eq!(schedule.wait_minutes, 0);
        assert_eq!(schedule.total_minutes(), 245);
    }

    #[test]
    fn test_waits_for_fixed_time() {
        let stops = vec![
            stop("a", RequestedTime::Flexible, 30),
            stop("b", RequestedTime::Fixed(at(10, 0)), 30),
        ];
        let schedule =
            generate_schedule(&[0, 1], &stops, &legs(), &OptimizerConfig::default()).unwrap();
        // Ready at 09:10, waits until 10:00.
        assert_eq!(schedule.entries[1].arrival_time, at(10, 0));
        assert_eq!(schedule.entries[1].departure_time, at(10, 30));
        assert_eq!(schedule.wait_minutes, 50);
    }

    #[test]
    fn test_first_stop_waits_for_fixed_time() {
        let stops = vec![stop("a", RequestedTime::Fixed(at(9, 15)), 30)];
        let schedule =
            generate_schedule(&[0], &stops, &DistanceMatrix::empty(), &OptimizerConfig::default())
                .unwrap();
        assert_eq!(schedule.entries[0].arrival_time, at(9, 15));
    }

    #[test]
    fn test_late_fixed_time_does_not_pull_clock_back() {
        let stops = vec![
            stop("a", RequestedTime::Flexible, 120),
            stop("b", RequestedTime::Fixed(at(8, 30)), 30),
        ];
        let schedule =
            generate_schedule(&[0, 1], &stops, &legs(), &OptimizerConfig::default()).unwrap();
        assert_eq!(schedule.entries[1].arrival_time, at(10, 40));
    }

    #[test]
    fn test_custom_start_speed_and_buffer() {
        let stops = vec![
            stop("a", RequestedTime::Flexible, 30),
            stop("b", RequestedTime::Flexible, 30),
        ];
        let config = OptimizerConfig::default()
            .with_day_start(at(7, 0))
            .with_average_speed_mph(50.0)
            .with_inter_stop_buffer_minutes(0);
        let schedule = generate_schedule(&[0, 1], &stops, &legs(), &config).unwrap();
        assert_eq!(schedule.entries[1].arrival_time, at(7, 45));
    }

    #[test]
    fn test_past_midnight_overflows() {
        let stops = vec![
            stop("a", RequestedTime::Fixed(at(23, 0)), 90),
        ];
        let err = generate_schedule(&[0], &stops, &DistanceMatrix::empty(), &OptimizerConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            OptimizerError::ScheduleOverflow {
                stop_id: "a".to_string()
            }
        );
    }

    #[test]
    fn test_huge_service_duration_overflows() {
        let stops = vec![stop("long", RequestedTime::Flexible, u32::MAX)];
        let err = generate_schedule(&[0], &stops, &DistanceMatrix::empty(), &OptimizerConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            OptimizerError::ScheduleOverflow {
                stop_id: "long".to_string()
            }
        );
    }

    #[test]
    fn test_crawling_speed_overflows() {
        let stops = vec![
            stop("a", RequestedTime::Flexible, 30),
            stop("b", RequestedTime::Flexible, 30),
        ];
        let config = OptimizerConfig::default().with_average_speed_mph(1e-12);
        assert!(config.validate().is_ok());
        let err = generate_schedule(&[0, 1], &stops, &legs(), &config).unwrap_err();
        assert_eq!(
            err,
            OptimizerError::ScheduleOverflow {
                stop_id: "b".to_string()
            }
        );
    }

    #[test]
    fn test_empty_route() {
        let schedule =
            generate_schedule(&[], &[], &DistanceMatrix::empty(), &OptimizerConfig::default())
                .unwrap();
        assert!(schedule.entries.is_empty());
        assert_eq!(schedule.total_minutes(), 0);
    }
}
