//! `rp-planner` — the query surface of the `rproute` planner.
//!
//! [`RoutePlanner`] owns the location store, the proximity graph built from
//! it, the current weather, the random source, and the clock.  It answers:
//!
//! | Query                               | Returns                        |
//! |-------------------------------------|--------------------------------|
//! | [`find_path`](RoutePlanner::find_path)             | `Path` (empty = no route) |
//! | [`quote_fare`](RoutePlanner::quote_fare)           | `FareQuote`               |
//! | [`build_itinerary`](RoutePlanner::build_itinerary) | `Itinerary`               |
//! | [`plan_trip`](RoutePlanner::plan_trip)             | all of the above          |
//! | [`list_locations`](RoutePlanner::list_locations)   | locations by name         |
//! | [`coordinates`](RoutePlanner::coordinates)         | `(lat, lon)`              |
//! | [`update_weather`](RoutePlanner::update_weather)   | new `WeatherCondition`    |
//! | [`summary`](RoutePlanner::summary)                 | `NetworkSummary`          |
//!
//! Construct one with [`PlannerBuilder`].
//!
//! # Example
//!
//! ```
//! use rp_core::{FixedClock, HourOfDay, PlannerConfig};
//! use rp_network::LocationStore;
//! use rp_planner::PlannerBuilder;
//!
//! let mut store = LocationStore::new();
//! store.add("Motijheel", 23.7330, 90.4172).unwrap();
//! store.add("Shahbag", 23.7383, 90.3958).unwrap();
//!
//! let config = PlannerConfig { seed: Some(7), ..Default::default() };
//! let mut planner = PlannerBuilder::new(config)
//!     .store(store)
//!     .clock(FixedClock(HourOfDay::new(9).unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let trip = planner.plan_trip("Motijheel", "Shahbag", true).unwrap();
//! assert_eq!(trip.stops, ["Motijheel", "Shahbag"]);
//! assert_eq!(trip.fare.final_fare, 10.0);
//! ```

pub mod builder;
pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use error::{PlannerError, PlannerResult};
pub use planner::{NetworkSummary, RoutePlanner};
