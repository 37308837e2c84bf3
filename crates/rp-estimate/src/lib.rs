//! `rp-estimate` — what a trip costs and how long it takes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`traffic`]  | `TrafficModel`, `TrafficStatus`                           |
//! | [`weather`]  | `WeatherCondition`, `WeatherModel`                        |
//! | [`fare`]     | `FarePolicy`, `FareEstimator`, `FareQuote`                |
//! | [`report`]   | `RouteReport`, `Itinerary`, `Segment`                     |
//!
//! # Two distances
//!
//! The fare is priced on the *direct* distance between the endpoints and
//! never looks at the route.  The itinerary sums the *route* distance hop by
//! hop.  Both numbers are reported; they are expected to differ.

pub mod fare;
pub mod report;
pub mod traffic;
pub mod weather;


pub use fare::{FareEstimator, FarePolicy, FareQuote};
pub use report::{Itinerary, RouteReport, Segment};
pub use traffic::{TrafficModel, TrafficStatus};
pub use weather::{WeatherCondition, WeatherModel};
