//! Time-of-day model.
//!
//! Traffic and time-of-day factors depend only on the hour of the day, so
//! the planner never needs a full timestamp.  The hour comes from a
//! [`Clock`]: [`SystemClock`] reads local wall-clock time, [`FixedClock`]
//! pins it for tests and what-if queries.

use std::fmt;

use chrono::Timelike;

use crate::{CoreError, CoreResult};

// ── HourOfDay ─────────────────────────────────────────────────────────────────

/// An hour of the day in `0..24`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// Validate and wrap an hour.
    pub fn new(hour: u8) -> CoreResult<Self> {
        if hour < 24 {
            Ok(HourOfDay(hour))
        } else {
            Err(CoreError::InvalidHour(hour))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// `true` if the hour falls in `[start, end)`.
    #[inline]
    pub fn within(self, start: u8, end: u8) -> bool {
        (start..end).contains(&self.0)
    }

    /// Late-night window, 23:00 through 05:59.
    #[inline]
    pub fn is_night(self) -> bool {
        self.0 >= 23 || self.0 < 6
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of the current hour of day.
pub trait Clock {
    fn hour(&self) -> HourOfDay;
}

/// Local wall-clock time via `chrono`.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> HourOfDay {
        // chrono guarantees `hour() < 24`.
        HourOfDay(chrono::Local::now().hour() as u8)
    }
}

/// A clock stuck at one hour.
#[derive(Copy, Clone, Debug)]
pub struct FixedClock(pub HourOfDay);

impl Clock for FixedClock {
    fn hour(&self) -> HourOfDay {
        self.0
    }
}
