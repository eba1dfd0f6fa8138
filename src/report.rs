//! Text rendering for scenarios, estimates, and the fleet scaling chart
//!
//! Everything here builds plain strings so the calculator core stays
//! printable-free and the output is testable without a terminal.

use crate::models::{Estimate, ScalingPoint, Scenario};

const CHART_ROWS: usize = 16;
const Y_LABEL_WIDTH: usize = 7;

/// Echo the scenario parameters the way the input screen showed them.
pub fn format_scenario(scenario: &Scenario) -> String {
    let mut out = String::new();
    out.push_str("=== Scenario ===\n");
    out.push_str(&format!("{:<24}{} kg\n", "Empty weight:", scenario.empty_weight_kg));
    out.push_str(&format!("{:<24}{} liters\n", "Payload:", scenario.payload_liters));
    out.push_str(&format!("{:<24}{} km/h\n", "Cruise speed:", scenario.cruise_speed_kmh));
    out.push_str(&format!("{:<24}{} hours\n", "Battery:", scenario.battery_hours));
    out.push_str(&format!("{:<24}{} km\n", "Lake distance:", scenario.lake_distance_km));
    out.push_str(&format!(
        "{:<24}{} ({:.0} min refill)\n",
        "Refill method:",
        scenario.refill_method.label(),
        scenario.refill_method.dwell_minutes()
    ));
    out.push_str(&format!("{:<24}{} drones\n", "Fleet size:", scenario.drone_count));
    out.push_str(&format!(
        "{:<24}${}\n",
        "Cost per drone:",
        group_thousands(scenario.drone_cost_usd)
    ));
    out.push_str(&format!(
        "{:<24}${} per drone-hour\n",
        "Operating cost:",
        group_thousands(scenario.operating_cost_per_hour_usd)
    ));
    out.push_str(&format!("{:<24}{} hours\n", "Fire duration:", scenario.fire_duration_hours));
    out
}

/// Format the eight result metrics as a labeled block.
pub fn format_estimate(estimate: &Estimate) -> String {
    let mut out = String::new();
    out.push_str("=== Fleet Estimate ===\n");
    out.push_str(&format!("{:<24}{:.2} hours\n", "Trip time:", estimate.trip_time_hours));
    out.push_str(&format!("{:<24}{:.1}\n", "Missions per hour:", estimate.missions_per_hour));
    out.push_str(&format!("{:<24}{:.1}\n", "Missions per drone:", estimate.missions_per_drone));
    out.push_str(&format!("{:<24}{:.1}\n", "Total drops:", estimate.total_drops));
    out.push_str(&format!(
        "{:<24}{} liters\n",
        "Water delivered:",
        group_thousands(estimate.total_water_liters)
    ));
    out.push_str(&format!(
        "{:<24}${}\n",
        "Operating cost:",
        group_thousands(estimate.total_operating_cost_usd)
    ));
    out.push_str(&format!("{:<24}${:.2}\n", "Cost per liter:", estimate.cost_per_liter_usd));
    out.push_str(&format!(
        "{:<24}${}\n",
        "Fleet acquisition cost:",
        group_thousands(estimate.fleet_acquisition_cost_usd)
    ));
    out
}

/// Scaling curve as a two-column table, one row per fleet size.
pub fn format_curve_table(points: &[ScalingPoint]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>6} {:>14}\n", "Drones", "Liters/hour"));
    out.push_str(&format!("{}\n", "-".repeat(21)));
    for point in points {
        out.push_str(&format!(
            "{:>6} {:>14.1}\n",
            point.drone_count, point.flow_liters_per_hour
        ));
    }
    out
}

/// Scaling curve as an ASCII line chart, one column per fleet size.
pub fn render_chart(points: &[ScalingPoint]) -> String {
    let mut out = String::new();
    out.push_str("Suppression Efficiency vs Fleet Size\n\n");
    out.push_str("Liters per Hour\n");

    let max_flow = points
        .iter()
        .map(|p| p.flow_liters_per_hour)
        .fold(0.0_f64, f64::max);
    let scale = if max_flow > 0.0 {
        (CHART_ROWS - 1) as f64 / max_flow
    } else {
        0.0
    };

    let mut grid = vec![vec![' '; points.len()]; CHART_ROWS];
    for (col, point) in points.iter().enumerate() {
        let row = (point.flow_liters_per_hour * scale).round() as usize;
        grid[row.min(CHART_ROWS - 1)][col] = '*';
    }

    for row in (0..CHART_ROWS).rev() {
        if row % 5 == 0 {
            let value = max_flow * row as f64 / (CHART_ROWS - 1) as f64;
            out.push_str(&format!("{value:>w$.0}", w = Y_LABEL_WIDTH));
        } else {
            out.push_str(&" ".repeat(Y_LABEL_WIDTH));
        }
        out.push_str(" |");
        out.extend(grid[row].iter());
        out.push('\n');
    }

    out.push_str(&" ".repeat(Y_LABEL_WIDTH));
    out.push_str(" +");
    out.push_str(&"-".repeat(points.len()));
    out.push('\n');

    // Fleet-size ticks, each right-aligned under its own column.
    let mut ticks = vec![' '; points.len()];
    for n in [1_usize, 10, 20, 30, 40, 50] {
        if n > points.len() {
            continue;
        }
        let label: Vec<char> = n.to_string().chars().collect();
        let start = n - label.len();
        for (i, c) in label.into_iter().enumerate() {
            ticks[start + i] = c;
        }
    }
    out.push_str(&" ".repeat(Y_LABEL_WIDTH + 2));
    out.push_str(&ticks.into_iter().collect::<String>());
    out.push('\n');

    out.push_str(&" ".repeat(Y_LABEL_WIDTH + 2));
    out.push_str(&format!("{:^w$}\n", "Number of Drones", w = points.len().max(16)));
    out
}

/// Round to a whole number and insert thousands separators.
fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
