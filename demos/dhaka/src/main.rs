//! dhaka — plan one bus trip across a small Dhaka location set.
//!
//! ```text
//! dhaka <locations-file> <start> <end> [--student] [--config planner.json]
//! ```
//!
//! Prints the stop sequence, a per-segment table, and the fare.  Set
//! `RUST_LOG=debug` to see graph rebuilds and routing decisions.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use rp_core::PlannerConfig;
use rp_estimate::{FarePolicy, Itinerary};
use rp_planner::{PlannerBuilder, PlannerError};

struct Args {
    locations: PathBuf,
    start:     String,
    end:       String,
    student:   bool,
    config:    Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut student = false;
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--student" => student = true,
            "--config" => {
                config = Some(PathBuf::from(args.next().context("--config needs a path")?));
            }
            _ => positional.push(arg),
        }
    }

    let [locations, start, end]: [String; 3] = positional.try_into().map_err(|_| {
        anyhow::anyhow!("usage: dhaka <locations-file> <start> <end> [--student] [--config file.json]")
    })?;
    Ok(Args { locations: locations.into(), start, end, student, config })
}

fn load_config(path: Option<&PathBuf>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let config = PlannerConfig {
        data_file: Some(args.locations.clone()),
        ..load_config(args.config.as_ref())?
    };

    let mut planner = PlannerBuilder::new(config).build()?;
    tracing::debug!(start = %args.start, end = %args.end, student = args.student, "planning trip");

    let trip = match planner.plan_trip(&args.start, &args.end, args.student) {
        Ok(trip) => trip,
        Err(PlannerError::UnknownLocation(name)) => bail!("invalid location name: {name}"),
        Err(e) => return Err(e.into()),
    };

    if !trip.has_route() && args.start != args.end {
        println!("No route found between {} and {}.", args.start, args.end);
        return Ok(());
    }

    print_itinerary(&trip, &planner.summary().fare_policy);
    Ok(())
}

fn print_itinerary(trip: &Itinerary, policy: &FarePolicy) {
    println!("Route:   {}", trip.stops.join(" -> "));
    println!("Weather: {} {} ({:.2}x, no effect on fare)", trip.weather.indicator(), trip.weather, trip.weather.impact());
    println!("Hour:    {}", trip.hour);
    println!();
    println!(
        "{:<28}{:>10}{:>10}{:>8}{:>10}{:>8}  Status",
        "Segment", "Dist(km)", "Traffic", "TimeF", "Weather", "Min"
    );
    for s in &trip.segments {
        let status = s.traffic_status();
        println!(
            "{:<28}{:>10.2}{:>10.2}{:>8.2}{:>10.2}{:>8}  {} {}",
            format!("{}->{}", s.from, s.to),
            s.distance_km,
            s.traffic_factor,
            s.time_factor,
            s.weather_factor,
            s.travel_time_minutes,
            status.indicator(),
            status,
        );
    }
    println!();
    println!("Route distance:  {:>8.2} km (actual path)", trip.route_distance_km);
    println!("Direct distance: {:>8.2} km (for fare)", trip.fare.direct_distance_km);
    print!("Total fare:      {:>8.2}", trip.fare.final_fare);
    if trip.fare.discount_applied {
        print!(" (student fare)");
    }
    if trip.fare.at_minimum(policy) {
        print!(" (minimum fare)");
    }
    println!();
    println!("Total time:      {:>8} min", trip.total_time_minutes);
    println!("Segments:        {:>8}", trip.segments.len());
}
