//! Tests for the planner facade.

use rp_core::{FixedClock, HourOfDay, PlannerConfig};
use rp_estimate::WeatherCondition;
use rp_network::{DijkstraRouter, LocationStore};

use crate::{PlannerBuilder, PlannerError, RoutePlanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seeded_config() -> PlannerConfig {
    PlannerConfig { seed: Some(42), ..Default::default() }
}

/// A–B ≈ 2.45 km, B–C ≈ 3.02 km, A–C ≈ 5.40 km, Island far away.
fn dhaka_store() -> LocationStore {
    let mut store = LocationStore::new();
    store.add("A", 23.700, 90.400).unwrap();
    store.add("B", 23.720, 90.410).unwrap();
    store.add("C", 23.740, 90.430).unwrap();
    store.add("Island", 24.500, 91.000).unwrap();
    store
}

fn planner_at(hour: u8) -> RoutePlanner<DijkstraRouter, FixedClock> {
    PlannerBuilder::new(seeded_config())
        .store(dhaka_store())
        .clock(FixedClock(HourOfDay::new(hour).unwrap()))
        .weather(WeatherCondition::Rainy)
        .build()
        .unwrap()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_graph_from_supplied_store() {
        let planner = planner_at(12);
        assert_eq!(planner.store().len(), 4);
        assert!(planner.graph().has_edge("A", "B"));
        assert_eq!(planner.weather(), WeatherCondition::Rainy);
        assert_eq!(planner.hour().get(), 12);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PlannerConfig { radius_km: -1.0, ..Default::default() };
        let err = PlannerBuilder::new(config).build().err().unwrap();
        assert!(matches!(err, PlannerError::Config(_)), "{err}");
    }

    #[test]
    fn missing_data_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlannerConfig {
            data_file: Some(dir.path().join("absent.txt")),
            ..seeded_config()
        };
        let mut planner = PlannerBuilder::new(config).build().unwrap();
        assert_eq!(planner.list_locations().len(), 0);
        assert!(planner.find_path("A", "B").is_empty());
        assert_eq!(planner.summary().locations, 0);
        let _ = planner.update_weather();
    }

    #[test]
    fn loads_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.txt");
        std::fs::write(&path, "A 23.700 90.400\nB 23.720 90.410\n").unwrap();

        let config = PlannerConfig { data_file: Some(path), ..seeded_config() };
        let planner = PlannerBuilder::new(config).build().unwrap();
        assert_eq!(planner.find_path("A", "B").stops, ["A", "B"]);
    }

    #[test]
    fn non_utf8_data_file_still_builds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.txt");
        std::fs::write(
            &path,
            b"Motijheel 23.7330 90.4172\nShahbag 23.7383 90.3958\nCaf\xe9 23.74 90.40\n",
        )
        .unwrap();

        let config = PlannerConfig { data_file: Some(path), ..seeded_config() };
        let planner = PlannerBuilder::new(config).build().unwrap();
        assert_eq!(planner.list_locations().len(), 3);
        assert_eq!(planner.find_path("Motijheel", "Shahbag").stops, ["Motijheel", "Shahbag"]);
    }

    #[test]
    fn unreadable_data_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlannerConfig { data_file: Some(dir.path().to_path_buf()), ..seeded_config() };
        let planner = PlannerBuilder::new(config).build().unwrap();
        assert_eq!(planner.list_locations().len(), 0);
    }

    #[test]
    fn same_seed_same_initial_weather() {
        let a = PlannerBuilder::new(seeded_config()).build().unwrap();
        let b = PlannerBuilder::new(seeded_config()).build().unwrap();
        assert_eq!(a.weather(), b.weather());
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn find_path_routes_via_b() {
        let planner = planner_at(12);
        assert_eq!(planner.find_path("A", "C").stops, ["A", "B", "C"]);
        assert_eq!(planner.find_path("A", "A").stops, ["A"]);
        assert!(planner.find_path("A", "Island").is_empty());
        assert!(planner.find_path("A", "Nowhere").is_empty());
    }

    #[test]
    fn quote_fare_uses_direct_distance() {
        let planner = planner_at(12);
        let quote = planner.quote_fare("A", "C", false).unwrap();
        let path = planner.find_path("A", "C");
        assert!(path.distance_km > quote.direct_distance_km);
        assert!((quote.final_fare - quote.direct_distance_km * 2.45).abs() < 1e-12);
    }

    #[test]
    fn quote_fare_unknown_place() {
        let planner = planner_at(12);
        let err = planner.quote_fare("A", "Nowhere", false).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownLocation(ref n) if n == "Nowhere"));
    }

    #[test]
    fn same_place_trip() {
        let mut planner = planner_at(12);
        let trip = planner.plan_trip("B", "B", false).unwrap();
        assert_eq!(trip.stops, ["B"]);
        assert!(trip.segments.is_empty());
        assert_eq!(trip.fare.final_fare, 10.0);
    }

    #[test]
    fn plan_trip_at_rush_hour() {
        let mut planner = planner_at(8);
        let trip = planner.plan_trip("A", "C", true).unwrap();

        assert!(trip.has_route());
        assert_eq!(trip.segments.len(), 2);
        assert_eq!(trip.weather, WeatherCondition::Rainy);
        assert_eq!(trip.hour.get(), 8);
        for s in &trip.segments {
            assert!(s.traffic_factor >= 1.4 && s.traffic_factor < 1.6);
            assert_eq!(s.time_factor, 1.15);
            assert_eq!(s.weather_factor, 1.25);
        }
        // Discounted 13.2 → 6.6 → floor.
        assert!(trip.fare.discount_applied);
        assert_eq!(trip.fare.final_fare, 10.0);
    }

    #[test]
    fn plan_trip_without_route() {
        let mut planner = planner_at(12);
        let trip = planner.plan_trip("A", "Island", false).unwrap();
        assert!(!trip.has_route());
        assert!(trip.stops.is_empty());
        assert!(trip.fare.final_fare > 10.0);
    }

    #[test]
    fn coordinates_lookup() {
        let planner = planner_at(12);
        assert_eq!(planner.coordinates("C").unwrap(), (23.740, 90.430));
        assert!(matches!(
            planner.coordinates("Nowhere"),
            Err(PlannerError::UnknownLocation(_))
        ));
    }

    #[test]
    fn list_locations_is_name_ordered() {
        let planner = planner_at(12);
        let names: Vec<_> = planner.list_locations().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "Island"]);
    }

    #[test]
    fn summary_reports_graph_and_policy() {
        let planner = planner_at(12);
        let s = planner.summary();
        assert_eq!(s.locations, 4);
        assert_eq!(s.connected, 3);
        assert_eq!(s.edges, 4);
        assert_eq!(s.radius_km, 5.0);
        assert_eq!(s.weather, WeatherCondition::Rainy);
        assert_eq!(s.fare_policy.min_fare, 10.0);
    }
}

// ── Mutation ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutation_tests {
    use super::*;

    #[test]
    fn add_location_rebuilds_graph() {
        let mut planner = planner_at(12);
        assert!(planner.find_path("A", "Island").is_empty());

        let ferry = planner.add_location("Ferry", 24.510, 91.010).unwrap();
        assert_eq!(ferry.coordinates(), (24.510, 91.010));
        assert!(planner.graph().has_edge("Ferry", "Island"));
        assert_eq!(planner.find_path("Ferry", "Island").stops, ["Ferry", "Island"]);
        assert_eq!(planner.summary().connected, 5);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut planner = planner_at(12);
        let err = planner.add_location("A", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, PlannerError::Network(_)), "{err}");
        assert_eq!(planner.coordinates("A").unwrap(), (23.700, 90.400));
    }

    #[test]
    fn add_location_appends_to_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.txt");
        std::fs::write(&path, "A 23.7 90.4\n").unwrap();

        let config = PlannerConfig { data_file: Some(path.clone()), ..seeded_config() };
        let mut planner = PlannerBuilder::new(config).build().unwrap();
        planner.add_location("B", 23.72, 90.41).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A 23.7 90.4\nB 23.72 90.41\n");
        assert_eq!(planner.find_path("A", "B").stops, ["A", "B"]);
    }

    #[test]
    fn unwritable_data_file_keeps_location_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let config = PlannerConfig { data_file: Some(dir.path().to_path_buf()), ..seeded_config() };
        let mut planner = PlannerBuilder::new(config).store(dhaka_store()).build().unwrap();
        planner.add_location("D", 23.76, 90.44).unwrap();
        assert!(planner.contains("D"));
    }

    #[test]
    fn weather_changes_only_on_update() {
        let mut planner = planner_at(12);
        let before = planner.weather();
        let _ = planner.plan_trip("A", "C", false).unwrap();
        assert_eq!(planner.weather(), before);

        let updated = planner.update_weather();
        assert_eq!(planner.weather(), updated);
    }
}
