//! Data models for fire scenarios and fleet estimates

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Slider ranges for the scenario parameters, inclusive on both ends.
/// Flag values outside a range are clamped to the nearest bound.
pub const EMPTY_WEIGHT_KG_RANGE: (f64, f64) = (10.0, 100.0);
pub const PAYLOAD_LITERS_RANGE: (f64, f64) = (5.0, 100.0);
pub const CRUISE_SPEED_KMH_RANGE: (f64, f64) = (20.0, 150.0);
pub const BATTERY_HOURS_RANGE: (f64, f64) = (0.5, 5.0);
pub const LAKE_DISTANCE_KM_RANGE: (f64, f64) = (0.5, 30.0);
pub const DRONE_COUNT_RANGE: (u32, u32) = (1, 50);
pub const FIRE_DURATION_HOURS_RANGE: (f64, f64) = (1.0, 12.0);

/// How a drone takes on water at the lake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillMethod {
    /// Scoop on the move, no full stop.
    Skimming,
    /// Land or hover to a stop while refilling.
    StopAndGo,
}

impl RefillMethod {
    pub const ALL: [RefillMethod; 2] = [RefillMethod::Skimming, RefillMethod::StopAndGo];

    /// Refill dwell time added to every trip.
    pub fn dwell_minutes(self) -> f64 {
        match self {
            RefillMethod::Skimming => 2.0,
            RefillMethod::StopAndGo => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RefillMethod::Skimming => "Skimming",
            RefillMethod::StopAndGo => "Stop-and-Go",
        }
    }
}

impl fmt::Display for RefillMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown refill method '{0}', expected 'skimming' or 'stop-and-go'")]
pub struct ParseRefillMethodError(String);

impl FromStr for RefillMethod {
    type Err = ParseRefillMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skimming" => Ok(RefillMethod::Skimming),
            "stop-and-go" | "stopandgo" | "stop_and_go" => Ok(RefillMethod::StopAndGo),
            _ => Err(ParseRefillMethodError(s.to_string())),
        }
    }
}

/// One fire scenario and fleet configuration, immutable for a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub empty_weight_kg: f64, // accepted but unused by the formulas
    pub payload_liters: f64,
    pub cruise_speed_kmh: f64,
    pub battery_hours: f64,
    pub lake_distance_km: f64,
    pub refill_method: RefillMethod,
    pub drone_count: u32,
    pub drone_cost_usd: f64,
    pub operating_cost_per_hour_usd: f64,
    pub fire_duration_hours: f64,
}

/// Result of a fleet estimate calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub trip_time_hours: f64,
    pub missions_per_hour: f64,
    /// Missions one drone completes over the fire, capped by battery endurance.
    pub missions_per_drone: f64,
    pub total_drops: f64,
    pub total_water_liters: f64,
    pub total_operating_cost_usd: f64,
    /// `f64::INFINITY` when no water is delivered.
    pub cost_per_liter_usd: f64,
    pub fleet_acquisition_cost_usd: f64,
}

/// One point of the fleet scaling curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingPoint {
    pub drone_count: u32,
    pub flow_liters_per_hour: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwell_minutes_per_method() {
        assert!((RefillMethod::Skimming.dwell_minutes() - 2.0).abs() < f64::EPSILON);
        assert!((RefillMethod::StopAndGo.dwell_minutes() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn refill_method_parses_case_insensitively() {
        assert_eq!("skimming".parse::<RefillMethod>().unwrap(), RefillMethod::Skimming);
        assert_eq!("Skimming".parse::<RefillMethod>().unwrap(), RefillMethod::Skimming);
        assert_eq!("stop-and-go".parse::<RefillMethod>().unwrap(), RefillMethod::StopAndGo);
        assert_eq!("Stop_And_Go".parse::<RefillMethod>().unwrap(), RefillMethod::StopAndGo);
    }

    #[test]
    fn refill_method_labels_round_trip() {
        for method in RefillMethod::ALL {
            assert_eq!(method.label().parse::<RefillMethod>().unwrap(), method);
        }
    }

    #[test]
    fn unknown_refill_method_is_an_error() {
        let err = "dunking".parse::<RefillMethod>().unwrap_err();
        assert!(err.to_string().contains("dunking"));
    }
}
