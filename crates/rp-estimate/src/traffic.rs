//! Synthetic traffic model.
//!
//! | Window          | Base factor | Time-of-day factor |
//! |-----------------|-------------|--------------------|
//! | 08:00–09:59     | 1.4         | 1.15               |
//! | 17:00–18:59     | 1.4         | 1.15               |
//! | 19:00–19:59     | 1.2         | 1.15               |
//! | 23:00–05:59     | 1.0         | 1.25               |
//! | any other hour  | 1.2         | 1.0                |
//!
//! The traffic factor adds a jitter of `0.00..=0.19` in steps of `0.01`.
//! Only the traffic factor feeds travel times; the time-of-day factor is
//! reported alongside it.

use rp_core::{HourOfDay, PlannerRng};

/// Stateless traffic factor generator.
#[derive(Copy, Clone, Debug, Default)]
pub struct TrafficModel;

impl TrafficModel {
    pub const PEAK: f64 = 1.4;
    pub const NIGHT: f64 = 1.0;
    pub const OFF_PEAK: f64 = 1.2;

    /// Jitter is `k / 100` for `k` drawn uniformly from `0..JITTER_STEPS`.
    const JITTER_STEPS: u32 = 20;

    /// Base factor for `hour`, before jitter.
    pub fn base_factor(&self, hour: HourOfDay) -> f64 {
        if hour.within(8, 10) || hour.within(17, 19) {
            Self::PEAK
        } else if hour.is_night() {
            Self::NIGHT
        } else {
            Self::OFF_PEAK
        }
    }

    /// Base factor for `hour` plus random jitter in `[0.00, 0.20)`.
    pub fn current_factor(&self, hour: HourOfDay, rng: &mut PlannerRng) -> f64 {
        let steps: u32 = rng.gen_range(0..Self::JITTER_STEPS);
        self.base_factor(hour) + f64::from(steps) / 100.0
    }

    /// Time-of-day factor.  Display only.
    pub fn time_factor(&self, hour: HourOfDay) -> f64 {
        if hour.is_night() {
            1.25
        } else if hour.within(8, 10) || hour.within(17, 20) {
            1.15
        } else {
            1.0
        }
    }
}

// ── TrafficStatus ─────────────────────────────────────────────────────────────

/// Congestion class of a traffic factor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficStatus {
    Smooth,
    Light,
    Moderate,
    Heavy,
}

impl TrafficStatus {
    /// Classify a factor.  Thresholds are strict: exactly 1.5 is Moderate.
    pub fn from_factor(factor: f64) -> Self {
        if factor > 1.5 {
            TrafficStatus::Heavy
        } else if factor > 1.3 {
            TrafficStatus::Moderate
        } else if factor > 1.1 {
            TrafficStatus::Light
        } else {
            TrafficStatus::Smooth
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficStatus::Smooth   => "Smooth",
            TrafficStatus::Light    => "Light",
            TrafficStatus::Moderate => "Moderate",
            TrafficStatus::Heavy    => "Heavy",
        }
    }

    /// Colour marker used in route tables.
    pub fn indicator(self) -> &'static str {
        match self {
            TrafficStatus::Smooth   => "🟢",
            TrafficStatus::Light    => "🟡",
            TrafficStatus::Moderate => "🟠",
            TrafficStatus::Heavy    => "🔴",
        }
    }
}

impl std::fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
