//! Unit tests for rp-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_is_inner_value() {
        assert_eq!(NodeId(42).index(), 42);
    }

    #[test]
    fn invalid_sorts_after_every_real_node() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert!(NodeId(0) < NodeId::INVALID);
        assert!(NodeId(u32::MAX - 1) < NodeId::INVALID);
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, distance_km};

    #[test]
    fn zero_distance() {
        assert_eq!(distance_km(23.7, 90.4, 23.7, 90.4), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_km(30.0, -88.0, 31.0, -88.0);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let ab = distance_km(23.700, 90.400, 23.750, 90.450);
        let ba = distance_km(23.750, 90.450, 23.700, 90.400);
        assert_eq!(ab, ba);
    }

    #[test]
    fn dhaka_reference_distances() {
        let a = GeoPoint::new(23.700, 90.400);
        let b = GeoPoint::new(23.720, 90.410);
        let c = GeoPoint::new(23.750, 90.450);
        assert!((a.distance_km(b) - 2.446).abs() < 0.001, "A-B {}", a.distance_km(b));
        assert!((b.distance_km(c) - 5.264).abs() < 0.001, "B-C {}", b.distance_km(c));
        assert!((a.distance_km(c) - 7.538).abs() < 0.001, "A-C {}", a.distance_km(c));
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * 6371.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, FixedClock, HourOfDay, SystemClock};

    #[test]
    fn hour_bounds() {
        assert!(HourOfDay::new(0).is_ok());
        assert!(HourOfDay::new(23).is_ok());
        assert!(HourOfDay::new(24).is_err());
    }

    #[test]
    fn night_window() {
        for h in [23, 0, 3, 5] {
            assert!(HourOfDay::new(h).unwrap().is_night(), "{h}");
        }
        for h in [6, 12, 22] {
            assert!(!HourOfDay::new(h).unwrap().is_night(), "{h}");
        }
    }

    #[test]
    fn within_is_half_open() {
        let h = HourOfDay::new(10).unwrap();
        assert!(!h.within(8, 10));
        assert!(h.within(10, 11));
    }

    #[test]
    fn fixed_clock() {
        let clock = FixedClock(HourOfDay::new(17).unwrap());
        assert_eq!(clock.hour().get(), 17);
        assert_eq!(clock.hour().to_string(), "17:00");
    }

    #[test]
    fn system_clock_in_range() {
        assert!(SystemClock.hour().get() < 24);
    }
}

#[cfg(test)]
mod rng {
    use crate::PlannerRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PlannerRng::new(12345);
        let mut r2 = PlannerRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = PlannerRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..0.2);
            assert!((0.0..0.2).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::PlannerConfig;

    #[test]
    fn defaults() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.radius_km, 5.0);
        assert_eq!(cfg.fare_per_km, 2.45);
        assert_eq!(cfg.student_multiplier, 0.5);
        assert_eq!(cfg.min_fare, 10.0);
        assert_eq!(cfg.avg_speed_kmh, 20.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad_radius = PlannerConfig { radius_km: 0.0, ..Default::default() };
        assert!(bad_radius.validate().is_err());

        let bad_speed = PlannerConfig { avg_speed_kmh: -1.0, ..Default::default() };
        assert!(bad_speed.validate().is_err());

        let bad_discount = PlannerConfig { student_multiplier: 1.5, ..Default::default() };
        assert!(bad_discount.validate().is_err());

        let bad_floor = PlannerConfig { min_fare: f64::NAN, ..Default::default() };
        assert!(bad_floor.validate().is_err());
    }
}
