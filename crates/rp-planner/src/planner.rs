//! The [`RoutePlanner`] facade.

use std::path::PathBuf;

use rp_core::{Clock, HourOfDay, PlannerConfig, PlannerRng, SystemClock};
use rp_estimate::{
    FareEstimator, FarePolicy, FareQuote, Itinerary, RouteReport, TrafficModel,
    WeatherCondition, WeatherModel,
};
use rp_network::{
    DijkstraRouter, Location, LocationStore, Path, ProximityGraph, ProximityGraphBuilder, Router,
    append_location,
};
use tracing::{info, warn};

use crate::PlannerResult;

// ── NetworkSummary ────────────────────────────────────────────────────────────

/// Snapshot of the planner's state for a "system information" view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkSummary {
    pub locations:   usize,
    /// Locations with at least one neighbour within the radius.
    pub connected:   usize,
    pub edges:       usize,
    pub radius_km:   f64,
    pub weather:     WeatherCondition,
    pub fare_policy: FarePolicy,
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Single-user, single-threaded route planner.
///
/// The graph is a cache of the store: every successful
/// [`add_location`](Self::add_location) rebuilds it in full.
pub struct RoutePlanner<R: Router = DijkstraRouter, C: Clock = SystemClock> {
    pub(crate) config:    PlannerConfig,
    pub(crate) store:     LocationStore,
    pub(crate) graph:     ProximityGraph,
    pub(crate) builder:   ProximityGraphBuilder,
    pub(crate) router:    R,
    pub(crate) clock:     C,
    pub(crate) rng:       PlannerRng,
    pub(crate) traffic:   TrafficModel,
    pub(crate) weather:   WeatherModel,
    pub(crate) fare:      FareEstimator,
    pub(crate) report:    RouteReport,
    pub(crate) data_file: Option<PathBuf>,
}

impl<R: Router, C: Clock> RoutePlanner<R, C> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    pub fn graph(&self) -> &ProximityGraph {
        &self.graph
    }

    pub fn weather(&self) -> WeatherCondition {
        self.weather.current()
    }

    pub fn hour(&self) -> HourOfDay {
        self.clock.hour()
    }

    // ── Locations ─────────────────────────────────────────────────────────

    /// All locations in name order.
    pub fn list_locations(&self) -> impl ExactSizeIterator<Item = &Location> + '_ {
        self.store.all()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn location(&self, name: &str) -> PlannerResult<&Location> {
        Ok(self.store.get(name)?)
    }

    /// `(latitude, longitude)` of `name`, for building map links.
    pub fn coordinates(&self, name: &str) -> PlannerResult<(f64, f64)> {
        Ok(self.location(name)?.coordinates())
    }

    /// Insert a new location and rebuild the graph.
    ///
    /// With a data file configured the record is also appended to it.  A
    /// failed append is logged; the location stays available in memory.
    pub fn add_location(&mut self, name: &str, lat: f64, lon: f64) -> PlannerResult<&Location> {
        let location = self.store.add(name, lat, lon)?.clone();
        self.rebuild_graph();

        if let Some(path) = &self.data_file {
            match append_location(path, &location) {
                Ok(()) => info!(name, path = %path.display(), "location saved"),
                Err(e) => warn!(name, path = %path.display(), error = %e, "could not save location"),
            }
        }
        self.location(name)
    }

    fn rebuild_graph(&mut self) {
        self.graph = self.builder.build_from_store(&self.store);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Shortest path by summed hop distance.  Empty when either name is
    /// unknown or the two are not connected.
    pub fn find_path(&self, start: &str, end: &str) -> Path {
        self.router.shortest_path(&self.graph, start, end)
    }

    /// Fare on the direct distance between two known locations.
    pub fn quote_fare(&self, start: &str, end: &str, student_discount: bool) -> PlannerResult<FareQuote> {
        let a = self.location(start)?;
        let b = self.location(end)?;
        Ok(self.fare.quote(a, b, student_discount))
    }

    /// Per-segment breakdown of `path` at the current hour and weather.
    ///
    /// Draws fresh traffic factors, so two calls on the same path generally
    /// give different times.
    pub fn build_itinerary(&mut self, path: &Path, fare: FareQuote) -> Itinerary {
        let hour = self.clock.hour();
        self.report.build(
            path,
            &self.store,
            &self.traffic,
            &self.weather,
            fare,
            hour,
            &mut self.rng,
        )
    }

    /// Route, price, and break down a trip in one call.
    ///
    /// Unknown names are an error.  Known but unconnected places give an
    /// itinerary without segments (see [`Itinerary::has_route`]).
    pub fn plan_trip(&mut self, start: &str, end: &str, student_discount: bool) -> PlannerResult<Itinerary> {
        let fare = self.quote_fare(start, end, student_discount)?;
        let path = self.find_path(start, end);
        Ok(self.build_itinerary(&path, fare))
    }

    // ── Weather ───────────────────────────────────────────────────────────

    /// Reselect the weather uniformly at random.
    pub fn update_weather(&mut self) -> WeatherCondition {
        let condition = self.weather.update(&mut self.rng);
        info!(weather = %condition, impact = condition.impact(), "weather updated");
        condition
    }

    // ── Summary ───────────────────────────────────────────────────────────

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            locations:   self.store.len(),
            connected:   self.graph.connected_count(),
            edges:       self.graph.edge_count(),
            radius_km:   self.graph.radius_km(),
            weather:     self.weather.current(),
            fare_policy: *self.fare.policy(),
        }
    }
}
