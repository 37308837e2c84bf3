//! Synthetic weather.
//!
//! The current condition is process-wide state owned by a [`WeatherModel`]
//! and changes only when [`WeatherModel::update`] is called.  Its impact
//! multiplier is shown to the user but does not enter any fare or travel
//! time arithmetic.

use rp_core::PlannerRng;

/// The fixed set of weather conditions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Foggy,
    HeavyRain,
    Stormy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 6] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Foggy,
        WeatherCondition::HeavyRain,
        WeatherCondition::Stormy,
    ];

    /// Uniform choice over [`ALL`](Self::ALL).
    pub fn random(rng: &mut PlannerRng) -> Self {
        let i = rng.gen_range(0..Self::ALL.len());
        Self::ALL[i]
    }

    /// Delay multiplier this condition would imply.
    pub fn impact(self) -> f64 {
        match self {
            WeatherCondition::Sunny     => 1.0,
            WeatherCondition::Cloudy    => 1.05,
            WeatherCondition::Rainy     => 1.25,
            WeatherCondition::Foggy     => 1.15,
            WeatherCondition::HeavyRain => 1.45,
            WeatherCondition::Stormy    => 1.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Sunny     => "Sunny",
            WeatherCondition::Cloudy    => "Cloudy",
            WeatherCondition::Rainy     => "Rainy",
            WeatherCondition::Foggy     => "Foggy",
            WeatherCondition::HeavyRain => "Heavy Rain",
            WeatherCondition::Stormy    => "Stormy",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            WeatherCondition::Sunny     => "🟡",
            WeatherCondition::Cloudy    => "⚪",
            WeatherCondition::Rainy     => "🔵",
            WeatherCondition::Foggy     => "🌫️",
            WeatherCondition::HeavyRain => "🔵",
            WeatherCondition::Stormy    => "🟣",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WeatherModel ──────────────────────────────────────────────────────────────

/// Holder of the current weather condition.
#[derive(Copy, Clone, Debug)]
pub struct WeatherModel {
    current: WeatherCondition,
}

impl WeatherModel {
    pub fn new(current: WeatherCondition) -> Self {
        Self { current }
    }

    /// Start with a uniformly random condition.
    pub fn random(rng: &mut PlannerRng) -> Self {
        Self::new(WeatherCondition::random(rng))
    }

    #[inline]
    pub fn current(&self) -> WeatherCondition {
        self.current
    }

    #[inline]
    pub fn impact(&self) -> f64 {
        self.current.impact()
    }

    /// Reselect the condition uniformly; it may come out unchanged.
    pub fn update(&mut self, rng: &mut PlannerRng) -> WeatherCondition {
        self.current = WeatherCondition::random(rng);
        self.current
    }
}
