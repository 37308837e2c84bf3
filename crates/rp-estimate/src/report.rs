//! Per-segment itinerary for a routed trip.
//!
//! # Travel time
//!
//! ```text
//! minutes = round(distance_km / avg_speed_kmh × 60 × traffic_factor)
//! ```
//!
//! Each segment also carries a time-of-day factor and the weather impact,
//! but neither is multiplied into `minutes`.

use rp_core::{HourOfDay, PlannerRng};
use rp_network::{LocationStore, Path};
use tracing::warn;

use crate::fare::FareQuote;
use crate::traffic::{TrafficModel, TrafficStatus};
use crate::weather::{WeatherCondition, WeatherModel};

/// Default assumed average speed.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 20.0;

// ── Segment ───────────────────────────────────────────────────────────────────

/// One hop of a routed trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from:                String,
    pub to:                  String,
    pub distance_km:         f64,
    pub traffic_factor:      f64,
    pub time_factor:         f64,
    pub weather_factor:      f64,
    pub travel_time_minutes: u32,
}

impl Segment {
    pub fn traffic_status(&self) -> TrafficStatus {
        TrafficStatus::from_factor(self.traffic_factor)
    }
}

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// Everything the presentation layer needs to show a trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    pub stops:              Vec<String>,
    pub segments:           Vec<Segment>,
    /// Sum of segment distances along the route taken.
    pub route_distance_km:  f64,
    pub total_time_minutes: u32,
    /// Priced on the direct distance, independent of `segments`.
    pub fare:               FareQuote,
    pub weather:            WeatherCondition,
    pub hour:               HourOfDay,
}

impl Itinerary {
    /// `false` means "no route": the caller should not present segments.
    pub fn has_route(&self) -> bool {
        !self.segments.is_empty()
    }
}

// ── RouteReport ───────────────────────────────────────────────────────────────

/// Turns a path into an [`Itinerary`].
#[derive(Copy, Clone, Debug)]
pub struct RouteReport {
    avg_speed_kmh: f64,
}

impl Default for RouteReport {
    fn default() -> Self {
        Self::new(DEFAULT_AVG_SPEED_KMH)
    }
}

impl RouteReport {
    pub fn new(avg_speed_kmh: f64) -> Self {
        Self { avg_speed_kmh }
    }

    /// Build the itinerary for `path`.
    ///
    /// Draws one traffic factor per segment from `rng`.  Hops whose
    /// endpoints are missing from `store` are skipped; that only happens
    /// when the path was routed over a stale graph.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &self,
        path:    &Path,
        store:   &LocationStore,
        traffic: &TrafficModel,
        weather: &WeatherModel,
        fare:    FareQuote,
        hour:    HourOfDay,
        rng:     &mut PlannerRng,
    ) -> Itinerary {
        let time_factor = traffic.time_factor(hour);
        let weather_factor = weather.impact();

        let mut segments = Vec::with_capacity(path.stops.len().saturating_sub(1));
        for (from, to) in path.hops() {
            let (Ok(a), Ok(b)) = (store.get(from), store.get(to)) else {
                warn!(from, to, "segment endpoint missing from store; skipped");
                continue;
            };
            let distance_km = a.pos.distance_km(b.pos);
            let traffic_factor = traffic.current_factor(hour, rng);

            segments.push(Segment {
                from: from.to_owned(),
                to: to.to_owned(),
                distance_km,
                traffic_factor,
                time_factor,
                weather_factor,
                travel_time_minutes: self.travel_minutes(distance_km, traffic_factor),
            });
        }

        Itinerary {
            stops: path.stops.clone(),
            route_distance_km: segments.iter().map(|s| s.distance_km).sum(),
            total_time_minutes: segments.iter().map(|s| s.travel_time_minutes).sum(),
            segments,
            fare,
            weather: weather.current(),
            hour,
        }
    }

    /// Minutes to cover `distance_km` at the average speed under
    /// `traffic_factor`, rounded to the nearest minute.
    pub fn travel_minutes(&self, distance_km: f64, traffic_factor: f64) -> u32 {
        (distance_km / self.avg_speed_kmh * 60.0 * traffic_factor).round() as u32
    }
}
