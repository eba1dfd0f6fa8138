//! Wildfire Drone Fleet Calculator
//!
//! Estimates fleet performance and cost for a wildfire suppression scenario.

mod estimator;
mod models;
mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::models::{
    BATTERY_HOURS_RANGE, CRUISE_SPEED_KMH_RANGE, DRONE_COUNT_RANGE, EMPTY_WEIGHT_KG_RANGE,
    FIRE_DURATION_HOURS_RANGE, LAKE_DISTANCE_KM_RANGE, PAYLOAD_LITERS_RANGE, RefillMethod,
    Scenario,
};

#[derive(Parser)]
#[command(name = "drone-fleet-calculator")]
#[command(about = "Fleet performance and cost calculator for wildfire suppression drones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate fleet performance and cost for one scenario
    Estimate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Append the fleet scaling chart below the metrics
        #[arg(long)]
        chart: bool,
    },

    /// Print the fleet scaling curve (liters per hour against fleet size)
    Curve {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Render an ASCII chart instead of the table
        #[arg(long)]
        chart: bool,
    },

    /// List refill methods and their dwell times
    Methods,
}

/// The scenario parameters, one flag per input control.
#[derive(Args)]
struct ScenarioArgs {
    /// Drone empty weight (kg)
    #[arg(long, default_value_t = 27.0)]
    empty_weight: f64,

    /// Payload capacity (liters)
    #[arg(long, default_value_t = 23.0)]
    payload: f64,

    /// Cruise speed (km/h)
    #[arg(long, default_value_t = 60.0)]
    cruise_speed: f64,

    /// Battery duration (hours)
    #[arg(long, default_value_t = 2.0)]
    battery: f64,

    /// Distance to the lake (km)
    #[arg(long, default_value_t = 5.0)]
    lake_distance: f64,

    /// Refill method: skimming or stop-and-go
    #[arg(long, default_value = "skimming")]
    refill_method: RefillMethod,

    /// Number of drones
    #[arg(long, default_value_t = 10)]
    drones: u32,

    /// Cost per drone (USD)
    #[arg(long, default_value_t = 136_000.0, allow_hyphen_values = true)]
    drone_cost: f64,

    /// Operating cost per drone-hour (USD)
    #[arg(long, default_value_t = 30.0)]
    operating_cost: f64,

    /// Fire duration (hours)
    #[arg(long, default_value_t = 5.0)]
    fire_duration: f64,
}

impl ScenarioArgs {
    /// Clamp every flag into its slider range and build the scenario.
    fn resolve(&self) -> Scenario {
        Scenario {
            empty_weight_kg: self
                .empty_weight
                .clamp(EMPTY_WEIGHT_KG_RANGE.0, EMPTY_WEIGHT_KG_RANGE.1),
            payload_liters: self.payload.clamp(PAYLOAD_LITERS_RANGE.0, PAYLOAD_LITERS_RANGE.1),
            cruise_speed_kmh: self
                .cruise_speed
                .clamp(CRUISE_SPEED_KMH_RANGE.0, CRUISE_SPEED_KMH_RANGE.1),
            battery_hours: self.battery.clamp(BATTERY_HOURS_RANGE.0, BATTERY_HOURS_RANGE.1),
            lake_distance_km: self
                .lake_distance
                .clamp(LAKE_DISTANCE_KM_RANGE.0, LAKE_DISTANCE_KM_RANGE.1),
            refill_method: self.refill_method,
            drone_count: self.drones.clamp(DRONE_COUNT_RANGE.0, DRONE_COUNT_RANGE.1),
            drone_cost_usd: self.drone_cost.max(0.0),
            operating_cost_per_hour_usd: self.operating_cost.max(0.0),
            fire_duration_hours: self
                .fire_duration
                .clamp(FIRE_DURATION_HOURS_RANGE.0, FIRE_DURATION_HOURS_RANGE.1),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate { scenario, chart } => {
            let scenario = scenario.resolve();
            let estimate = estimator::estimate(&scenario);

            print!("{}", report::format_scenario(&scenario));
            println!();
            print!("{}", report::format_estimate(&estimate));

            if chart {
                println!();
                print!("{}", report::render_chart(&estimator::scaling_curve(&scenario)));
            }
        }

        Commands::Curve { scenario, chart } => {
            let scenario = scenario.resolve();
            let points = estimator::scaling_curve(&scenario);

            if chart {
                print!("{}", report::render_chart(&points));
            } else {
                print!("{}", report::format_curve_table(&points));
            }
        }

        Commands::Methods => {
            println!("{:<12} {:>12}", "Method", "Refill (min)");
            println!("{}", "-".repeat(25));
            for method in RefillMethod::ALL {
                println!("{:<12} {:>12.0}", method.label(), method.dwell_minutes());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ScenarioArgs {
        let cli = Cli::try_parse_from(args).expect("should parse");
        match cli.command {
            Commands::Estimate { scenario, .. } => scenario,
            Commands::Curve { scenario, .. } => scenario,
            Commands::Methods => panic!("no scenario on methods"),
        }
    }

    #[test]
    fn defaults_match_the_input_screen() {
        let scenario = parse(&["drone-fleet-calculator", "estimate"]).resolve();
        assert!((scenario.empty_weight_kg - 27.0).abs() < f64::EPSILON);
        assert!((scenario.payload_liters - 23.0).abs() < f64::EPSILON);
        assert!((scenario.cruise_speed_kmh - 60.0).abs() < f64::EPSILON);
        assert!((scenario.battery_hours - 2.0).abs() < f64::EPSILON);
        assert!((scenario.lake_distance_km - 5.0).abs() < f64::EPSILON);
        assert_eq!(scenario.refill_method, RefillMethod::Skimming);
        assert_eq!(scenario.drone_count, 10);
        assert!((scenario.drone_cost_usd - 136_000.0).abs() < f64::EPSILON);
        assert!((scenario.operating_cost_per_hour_usd - 30.0).abs() < f64::EPSILON);
        assert!((scenario.fire_duration_hours - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_flags_clamp_to_the_slider_bounds() {
        let scenario = parse(&[
            "drone-fleet-calculator",
            "estimate",
            "--drones",
            "80",
            "--payload",
            "2",
            "--cruise-speed",
            "500",
            "--fire-duration",
            "0.1",
            "--drone-cost",
            "-5",
        ])
        .resolve();
        assert_eq!(scenario.drone_count, 50);
        assert!((scenario.payload_liters - 5.0).abs() < f64::EPSILON);
        assert!((scenario.cruise_speed_kmh - 150.0).abs() < f64::EPSILON);
        assert!((scenario.fire_duration_hours - 1.0).abs() < f64::EPSILON);
        assert!(scenario.drone_cost_usd.abs() < f64::EPSILON);
    }

    #[test]
    fn refill_method_flag_parses_both_methods() {
        let scenario = parse(&[
            "drone-fleet-calculator",
            "curve",
            "--refill-method",
            "stop-and-go",
        ])
        .resolve();
        assert_eq!(scenario.refill_method, RefillMethod::StopAndGo);
    }

    #[test]
    fn unknown_refill_method_is_rejected() {
        let result = Cli::try_parse_from([
            "drone-fleet-calculator",
            "estimate",
            "--refill-method",
            "dunking",
        ]);
        assert!(result.is_err());
    }
}
