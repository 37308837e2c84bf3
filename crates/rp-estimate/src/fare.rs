//! Direct-distance fare pricing.
//!
//! ```text
//! base  = direct_km × fare_per_km
//! fare  = base × student_multiplier   (student discount only)
//! final = max(fare, min_fare)
//! ```
//!
//! The floor is applied last, so a discounted short trip is raised back to
//! the minimum fare.

use rp_core::PlannerConfig;
use rp_network::Location;

/// Pricing constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FarePolicy {
    pub fare_per_km:        f64,
    pub student_multiplier: f64,
    pub min_fare:           f64,
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl FarePolicy {
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            fare_per_km:        config.fare_per_km,
            student_multiplier: config.student_multiplier,
            min_fare:           config.min_fare,
        }
    }
}

/// A priced trip.  Depends only on the two endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FareQuote {
    pub direct_distance_km: f64,
    /// Before discount and floor.
    pub base_fare:          f64,
    pub discount_applied:   bool,
    pub final_fare:         f64,
}

impl FareQuote {
    /// `true` when the minimum fare, not the distance, set the price.
    pub fn at_minimum(&self, policy: &FarePolicy) -> bool {
        self.final_fare <= policy.min_fare
    }
}

/// Prices trips under a [`FarePolicy`].
#[derive(Copy, Clone, Debug, Default)]
pub struct FareEstimator {
    policy: FarePolicy,
}

impl FareEstimator {
    pub fn new(policy: FarePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Price a trip from `start` to `end`.  Never fails.
    pub fn quote(&self, start: &Location, end: &Location, student_discount: bool) -> FareQuote {
        self.quote_distance(start.pos.distance_km(end.pos), student_discount)
    }

    /// Price a trip of a known direct distance.
    pub fn quote_distance(&self, direct_distance_km: f64, student_discount: bool) -> FareQuote {
        let base_fare = direct_distance_km * self.policy.fare_per_km;
        let discounted = if student_discount {
            base_fare * self.policy.student_multiplier
        } else {
            base_fare
        };
        FareQuote {
            direct_distance_km,
            base_fare,
            discount_applied: student_discount,
            final_fare: discounted.max(self.policy.min_fare),
        }
    }
}
