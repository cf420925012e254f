//! Unit tests for cafe-workload.

#[cfg(test)]
mod profiles {
    use crate::TestProfile;

    #[test]
    fn named_overrides_touch_one_parameter() {
        let base = TestProfile::default();

        let rush = TestProfile::for_test(2);
        assert_eq!(rush.espresso_chance, 0.8);
        assert_eq!(rush.loyalty_chance, base.loyalty_chance);
        assert_eq!(rush.mean_interarrival_secs, base.mean_interarrival_secs);

        let slow = TestProfile::for_test(3);
        assert_eq!(slow.espresso_chance, 0.05);

        let loyal = TestProfile::for_test(4);
        assert_eq!(loyal.loyalty_chance, 0.6);
        assert_eq!(loyal.espresso_chance, base.espresso_chance);

        let load = TestProfile::for_test(5);
        assert_eq!(load.mean_interarrival_secs, base.mean_interarrival_secs / 2.0);
        assert_eq!(load.name, "High Load");
    }

    #[test]
    fn other_tests_use_defaults() {
        for n in [1, 6, 7, 10, 42] {
            assert_eq!(TestProfile::for_test(n), TestProfile::default());
        }
    }

    #[test]
    fn order_counts() {
        assert_eq!(TestProfile::order_count(1), 210);
        assert_eq!(TestProfile::order_count(2), 300);
        assert_eq!(TestProfile::order_count(10), 300);
    }
}

#[cfg(test)]
mod weights {
    use cafe_core::DrinkKind;

    use crate::{BASE_DRINK_WEIGHTS, drink_weights, pick_drink};

    #[test]
    fn default_chance_keeps_catalog_weights() {
        let w = drink_weights(0.2);
        for (a, b) in w.iter().zip(BASE_DRINK_WEIGHTS.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn weights_always_sum_to_hundred() {
        for chance in [0.0, 0.05, 0.2, 0.8, 1.0] {
            let sum: f64 = drink_weights(chance).iter().sum();
            assert!((sum - 100.0).abs() < 1e-9, "chance {chance} sums to {sum}");
        }
    }

    #[test]
    fn cumulative_bounds() {
        let w = BASE_DRINK_WEIGHTS;
        assert_eq!(pick_drink(&w, 0.0), DrinkKind::ColdBrew);
        assert_eq!(pick_drink(&w, 24.99), DrinkKind::ColdBrew);
        assert_eq!(pick_drink(&w, 25.0), DrinkKind::Espresso);
        assert_eq!(pick_drink(&w, 45.0), DrinkKind::Americano);
        assert_eq!(pick_drink(&w, 60.0), DrinkKind::Cappuccino);
        assert_eq!(pick_drink(&w, 80.0), DrinkKind::Latte);
        assert_eq!(pick_drink(&w, 92.0), DrinkKind::SpecialtyMocha);
        assert_eq!(pick_drink(&w, 99.999), DrinkKind::SpecialtyMocha);
    }
}

#[cfg(test)]
mod generation {
    use cafe_core::{DrinkKind, OrderId, OrderStatus, SimConfig, Timestamp};

    use crate::WorkloadGenerator;

    #[test]
    fn same_inputs_same_stream() {
        let g = WorkloadGenerator::default();
        let a = g.generate(3, 240, 3 * 12_345).unwrap();
        let b = g.generate(3, 240, 3 * 12_345).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_stream() {
        let g = WorkloadGenerator::default();
        let a = g.generate(1, 100, 1).unwrap();
        let b = g.generate(1, 100, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn arrivals_are_sorted_and_clamped() {
        let g = WorkloadGenerator::default();
        let orders = g.generate(5, 600, 5 * 12_345).unwrap();
        let cap = Timestamp::from_secs(10_800);
        for pair in orders.windows(2) {
            assert!(pair[0].arrival() <= pair[1].arrival());
        }
        assert!(orders.iter().all(|o| o.arrival() <= cap));
    }

    #[test]
    fn short_window_pins_late_arrivals() {
        let cfg = SimConfig { session_window_secs: 600, ..SimConfig::default() };
        let orders = WorkloadGenerator::new(&cfg).generate(1, 200, 12_345).unwrap();
        assert_eq!(orders.last().unwrap().arrival(), Timestamp::from_secs(600));
    }

    #[test]
    fn ids_names_and_shape() {
        let orders = WorkloadGenerator::default().generate(4, 3, 4 * 12_345).unwrap();
        assert_eq!(orders[0].id(), OrderId(4_000));
        assert_eq!(orders[2].id(), OrderId(4_002));
        assert_eq!(orders[0].customer_name(), "Test4-Cust1");
        for o in &orders {
            assert_eq!(o.drinks().len(), 1);
            assert_eq!(o.status(), OrderStatus::Waiting);
        }
    }

    #[test]
    fn espresso_rush_is_mostly_espresso() {
        let orders = WorkloadGenerator::default().generate(2, 300, 2 * 12_345).unwrap();
        let espressos = orders.iter().filter(|o| o.drinks()[0] == DrinkKind::Espresso).count();
        assert!(espressos > 200, "only {espressos} espressos out of 300");
    }

    #[test]
    fn loyalty_flood_has_more_members() {
        let g = WorkloadGenerator::default();
        let flood = g.generate(4, 500, 4 * 12_345).unwrap();
        let plain = g.generate(1, 500, 4 * 12_345).unwrap();
        let count = |v: &[cafe_core::Order]| v.iter().filter(|o| o.is_loyal()).count();
        assert!(count(&flood) > count(&plain));
    }
}
