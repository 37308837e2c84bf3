//! Planner configuration.

use std::path::PathBuf;

use crate::{CoreError, CoreResult};

/// Top-level planner configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to the planner builder.  Missing fields take
/// their [`Default`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Two locations are directly connected when strictly closer than this.
    pub radius_km: f64,

    /// Fare per kilometre of direct (endpoint-to-endpoint) distance.
    pub fare_per_km: f64,

    /// Multiplier applied to the fare when the student discount is requested.
    pub student_multiplier: f64,

    /// Floor applied after any discount.
    pub min_fare: f64,

    /// Assumed average speed used for segment travel times.
    pub avg_speed_kmh: f64,

    /// Master RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Locations file.  When set, added locations are appended to it.
    pub data_file: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            radius_km:          5.0,
            fare_per_km:        2.45,
            student_multiplier: 0.5,
            min_fare:           10.0,
            avg_speed_kmh:      20.0,
            seed:               None,
            data_file:          None,
        }
    }
}

impl PlannerConfig {
    /// Reject values that would make distances, fares, or times meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        positive("radius_km", self.radius_km)?;
        positive("fare_per_km", self.fare_per_km)?;
        positive("avg_speed_kmh", self.avg_speed_kmh)?;

        if !(self.student_multiplier > 0.0 && self.student_multiplier <= 1.0) {
            return Err(CoreError::Config(format!(
                "student_multiplier must be in (0, 1], got {}",
                self.student_multiplier
            )));
        }
        if self.min_fare.is_nan() || self.min_fare < 0.0 {
            return Err(CoreError::Config(format!(
                "min_fare must be non-negative, got {}",
                self.min_fare
            )));
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> CoreResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{field} must be positive, got {value}")))
    }
}
