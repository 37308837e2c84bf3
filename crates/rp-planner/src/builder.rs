//! Fluent builder for constructing a [`RoutePlanner`].

use std::path::Path;

use rp_core::{Clock, PlannerConfig, PlannerRng, SystemClock};
use rp_estimate::{
    FareEstimator, FarePolicy, RouteReport, TrafficModel, WeatherCondition, WeatherModel,
};
use rp_network::{DijkstraRouter, LocationStore, NetworkError, ProximityGraphBuilder, Router};
use tracing::{info, warn};

use crate::{PlannerResult, RoutePlanner};

/// Fluent builder for [`RoutePlanner<R, C>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                             |
/// |-----------------|-----------------------------------------------------|
/// | `.store(s)`     | Loaded from `config.data_file`, else empty          |
/// | `.router(r)`    | `DijkstraRouter`                                    |
/// | `.clock(c)`     | `SystemClock` (local time)                          |
/// | `.rng(r)`       | `PlannerRng` from `config.seed`                     |
/// | `.weather(w)`   | Uniformly random condition drawn from the RNG       |
///
/// A data file that cannot be opened or read is not fatal: the planner
/// starts with no locations and logs a warning.
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(config)
///     .clock(FixedClock(HourOfDay::new(8)?))
///     .build()?;
/// ```
pub struct PlannerBuilder<R: Router = DijkstraRouter, C: Clock = SystemClock> {
    config:  PlannerConfig,
    store:   Option<LocationStore>,
    router:  R,
    clock:   C,
    rng:     Option<PlannerRng>,
    weather: Option<WeatherCondition>,
}

impl PlannerBuilder {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            store:   None,
            router:  DijkstraRouter,
            clock:   SystemClock,
            rng:     None,
            weather: None,
        }
    }
}

impl<R: Router, C: Clock> PlannerBuilder<R, C> {
    /// Use these locations instead of reading `config.data_file`.
    ///
    /// Additions are still appended to `config.data_file` if it is set.
    pub fn store(mut self, store: LocationStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn router<R2: Router>(self, router: R2) -> PlannerBuilder<R2, C> {
        PlannerBuilder {
            config:  self.config,
            store:   self.store,
            router,
            clock:   self.clock,
            rng:     self.rng,
            weather: self.weather,
        }
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> PlannerBuilder<R, C2> {
        PlannerBuilder {
            config:  self.config,
            store:   self.store,
            router:  self.router,
            clock,
            rng:     self.rng,
            weather: self.weather,
        }
    }

    /// Supply the random source; overrides `config.seed`.
    pub fn rng(mut self, rng: PlannerRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Start in a known weather condition instead of a random one.
    pub fn weather(mut self, condition: WeatherCondition) -> Self {
        self.weather = Some(condition);
        self
    }

    /// Validate the configuration, load locations, build the graph, and
    /// return a ready planner.
    pub fn build(self) -> PlannerResult<RoutePlanner<R, C>> {
        self.config.validate()?;

        let data_file = self.config.data_file.clone();
        let store = match self.store {
            Some(store) => store,
            None => match &data_file {
                Some(path) => load_or_empty(path)?,
                None => LocationStore::new(),
            },
        };

        let mut rng = self
            .rng
            .unwrap_or_else(|| PlannerRng::from_seed_option(self.config.seed));
        let weather = match self.weather {
            Some(condition) => WeatherModel::new(condition),
            None => WeatherModel::random(&mut rng),
        };

        let builder = ProximityGraphBuilder::with_radius(self.config.radius_km);
        let graph = builder.build_from_store(&store);

        info!(
            locations = store.len(),
            connected = graph.connected_count(),
            weather = %weather.current(),
            fare_per_km = self.config.fare_per_km,
            "route planner ready"
        );

        Ok(RoutePlanner {
            fare: FareEstimator::new(FarePolicy::from_config(&self.config)),
            report: RouteReport::new(self.config.avg_speed_kmh),
            traffic: TrafficModel,
            config: self.config,
            store,
            graph,
            builder,
            router: self.router,
            clock: self.clock,
            rng,
            weather,
            data_file,
        })
    }
}

/// Load the data file, falling back to an empty store if it cannot be
/// opened or read.
fn load_or_empty(path: &Path) -> PlannerResult<LocationStore> {
    let mut store = LocationStore::new();
    match store.load_path(path) {
        Ok(_) => Ok(store),
        Err(NetworkError::DataUnavailable { path, source }) => {
            warn!(path = %path.display(), error = %source, "location data unavailable; starting empty");
            Ok(LocationStore::new())
        }
        Err(e) => Err(e.into()),
    }
}
