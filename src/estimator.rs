//! Fleet performance and cost estimation logic

use crate::models::{Estimate, ScalingPoint, Scenario};

/// Largest fleet size covered by the scaling curve.
pub const SCALING_CURVE_MAX_DRONES: u32 = 50;

/// Estimate fleet performance and cost for one scenario.
///
/// Pure arithmetic over the scenario fields; total over the declared input
/// ranges, so there is no error path. Missions per drone is a single-shift
/// capacity estimate: endurance caps flying time and recharge cycles are
/// ignored.
pub fn estimate(scenario: &Scenario) -> Estimate {
    let fleet = f64::from(scenario.drone_count);

    let trip_time_hours = 2.0 * scenario.lake_distance_km / scenario.cruise_speed_kmh
        + scenario.refill_method.dwell_minutes() / 60.0;

    // Unreachable with in-range speed and distance, but the guard keeps the
    // function total.
    let missions_per_hour = if trip_time_hours > 0.0 {
        1.0 / trip_time_hours
    } else {
        0.0
    };

    let flying_hours = scenario.battery_hours.min(scenario.fire_duration_hours);
    let missions_per_drone = flying_hours * missions_per_hour;

    let total_drops = missions_per_drone * fleet;
    let total_water_liters = total_drops * scenario.payload_liters;

    // Drones are billed for the whole incident, standby time included.
    let total_operating_cost_usd =
        fleet * scenario.operating_cost_per_hour_usd * scenario.fire_duration_hours;

    let cost_per_liter_usd = if total_water_liters > 0.0 {
        total_operating_cost_usd / total_water_liters
    } else {
        f64::INFINITY
    };

    Estimate {
        trip_time_hours,
        missions_per_hour,
        missions_per_drone,
        total_drops,
        total_water_liters,
        total_operating_cost_usd,
        cost_per_liter_usd,
        fleet_acquisition_cost_usd: fleet * scenario.drone_cost_usd,
    }
}

/// Water flow rate against fleet size, one point per fleet of 1..=50 drones.
///
/// Missions per drone is derived once from the scenario; the configured
/// `drone_count` does not influence the curve.
pub fn scaling_curve(scenario: &Scenario) -> Vec<ScalingPoint> {
    let missions_per_drone = estimate(scenario).missions_per_drone;

    (1..=SCALING_CURVE_MAX_DRONES)
        .map(|n| ScalingPoint {
            drone_count: n,
            flow_liters_per_hour: f64::from(n) * missions_per_drone * scenario.payload_liters
                / scenario.fire_duration_hours,
        })
        .collect()
}
