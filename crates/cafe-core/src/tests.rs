//! Unit tests for cafe-core primitives.

#[cfg(test)]
mod ids {
    use crate::{OrderId, WorkerId};

    #[test]
    fn index_roundtrip() {
        let id = WorkerId(2);
        assert_eq!(id.index(), 2);
        assert_eq!(WorkerId::try_from(2usize).unwrap(), id);
    }

    #[test]
    fn order_ids_sort_in_issue_order() {
        assert!(OrderId(1) < OrderId(2));
    }

    #[test]
    fn worker_labels_count_from_one() {
        assert_eq!(WorkerId(0).to_string(), "Barista 1");
        assert_eq!(WorkerId(2).to_string(), "Barista 3");
    }

    #[test]
    fn worker_id_rejects_overflow() {
        assert!(WorkerId::try_from(70_000usize).is_err());
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::Timestamp;

    #[test]
    fn secs_since_truncates() {
        let arrival = Timestamp::from_millis(1_000);
        assert_eq!(Timestamp::from_millis(2_999).secs_since(arrival), 1);
        assert_eq!(Timestamp::from_millis(3_000).secs_since(arrival), 2);
    }

    #[test]
    fn secs_since_saturates_at_zero() {
        assert_eq!(Timestamp::from_secs(5).secs_since(Timestamp::from_secs(9)), 0);
    }

    #[test]
    fn arithmetic() {
        let t = Timestamp::from_secs(10);
        assert_eq!(t + Duration::from_secs(5), Timestamp::from_secs(15));
        assert_eq!(t.plus_secs(120), Timestamp::from_secs(130));
        assert_eq!(Timestamp::from_secs(15) - t, Duration::from_secs(5));
        assert_eq!(t - Timestamp::from_secs(15), Duration::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp::from_millis(12_345).to_string(), "12.345s");
    }
}

#[cfg(test)]
mod drink {
    use crate::{CafeError, DrinkKind, parse_drinks};

    #[test]
    fn catalog_values() {
        assert_eq!(DrinkKind::Espresso.prep_minutes(), 2);
        assert_eq!(DrinkKind::SpecialtyMocha.prep_minutes(), 6);
        assert_eq!(DrinkKind::Latte.price_rupees(), 200);
        let total: u32 = DrinkKind::ALL.iter().map(|d| d.prep_minutes()).sum();
        assert_eq!(total, 19);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("espresso".parse::<DrinkKind>().unwrap(), DrinkKind::Espresso);
        assert_eq!("COLD_BREW".parse::<DrinkKind>().unwrap(), DrinkKind::ColdBrew);
    }

    #[test]
    fn unknown_drink_rejects_whole_list() {
        let err = parse_drinks(&["LATTE", "FRAPPE", "ESPRESSO"]).unwrap_err();
        assert!(matches!(err, CafeError::UnknownDrink(ref name) if name == "FRAPPE"));
    }

    #[test]
    fn identifiers_round_trip_through_display() {
        for kind in DrinkKind::ALL {
            assert_eq!(kind.to_string().parse::<DrinkKind>().unwrap(), kind);
        }
    }
}

#[cfg(test)]
mod order {
    use crate::{CafeError, DrinkKind, Order, OrderId, OrderStatus, Timestamp};

    fn espresso_order() -> Order {
        Order::new(OrderId(1), "Ada", vec![DrinkKind::Espresso], false, Timestamp::from_secs(100))
            .unwrap()
    }

    #[test]
    fn empty_order_rejected() {
        let err = Order::new(OrderId(1), "Ada", vec![], false, Timestamp::ZERO).unwrap_err();
        assert!(matches!(err, CafeError::EmptyOrder));
    }

    #[test]
    fn totals_sum_over_drinks() {
        let o = Order::new(
            OrderId(7),
            "Bo",
            vec![DrinkKind::Latte, DrinkKind::ColdBrew],
            true,
            Timestamp::ZERO,
        )
        .unwrap();
        assert_eq!(o.total_prep_minutes(), 5);
        assert_eq!(o.total_price_rupees(), 320);
    }

    #[test]
    fn lifecycle_advances_in_order() {
        let mut o = espresso_order();
        assert_eq!(o.status(), OrderStatus::Waiting);
        o.start(Timestamp::from_secs(130)).unwrap();
        assert_eq!(o.status(), OrderStatus::Processing);
        o.complete(Timestamp::from_secs(250)).unwrap();
        assert_eq!(o.status(), OrderStatus::Completed);
        assert_eq!(o.total_wait_secs(), Some(150));
    }

    #[test]
    fn cannot_skip_processing() {
        let mut o = espresso_order();
        let err = o.complete(Timestamp::from_secs(200)).unwrap_err();
        assert!(matches!(err, CafeError::InvalidTransition { from: OrderStatus::Waiting, .. }));
        assert_eq!(o.status(), OrderStatus::Waiting);
    }

    #[test]
    fn cannot_regress_or_restart() {
        let mut o = espresso_order();
        o.start(Timestamp::from_secs(100)).unwrap();
        assert!(o.start(Timestamp::from_secs(101)).is_err());
        o.complete(Timestamp::from_secs(110)).unwrap();
        assert!(o.start(Timestamp::from_secs(120)).is_err());
        assert!(o.complete(Timestamp::from_secs(120)).is_err());
        assert_eq!(o.completed_at(), Some(Timestamp::from_secs(110)));
    }

    #[test]
    fn timestamps_never_precede_each_other() {
        let mut o = espresso_order();
        // Clock reads earlier than arrival are clamped.
        o.start(Timestamp::from_secs(50)).unwrap();
        o.complete(Timestamp::from_secs(40)).unwrap();
        let start = o.started_at().unwrap();
        let done = o.completed_at().unwrap();
        assert!(done >= start && start >= o.arrival());
    }

    #[test]
    fn alert_flags_are_one_shot() {
        let mut o = espresso_order();
        assert!(o.mark_warning_sent());
        assert!(!o.mark_warning_sent());
        assert!(o.mark_breach_sent());
        assert!(!o.mark_breach_sent());
        assert!(o.warning_sent() && o.breach_sent());
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{CafeConfig, LiveConfig, SimConfig};

    #[test]
    fn defaults_match_reference_policy() {
        let cfg = CafeConfig::default();
        assert_eq!(cfg.live.worker_count, 3);
        assert_eq!(cfg.live.tick_period(), Duration::from_secs(1));
        assert_eq!(cfg.live.prep_duration(2), Duration::from_secs(10));
        assert_eq!(cfg.sim.session_window_secs, 10_800);
        assert_eq!(cfg.sim.seed_for(2), 24_690);
        cfg.validate().unwrap();
    }

    #[test]
    fn zero_workers_rejected() {
        let live = LiveConfig { worker_count: 0, ..LiveConfig::default() };
        assert!(live.validate().is_err());
        let sim = SimConfig { worker_count: 0, ..SimConfig::default() };
        assert!(sim.validate().is_err());
    }

    #[test]
    fn zero_tick_period_rejected() {
        let live = LiveConfig { tick_period_ms: 0, ..LiveConfig::default() };
        assert!(live.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::WorkloadRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = WorkloadRng::new(99);
        let mut b = WorkloadRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn unit_stays_in_range() {
        let mut r = WorkloadRng::new(1);
        for _ in 0..1_000 {
            let u = r.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn exponential_is_finite_and_non_negative() {
        let mut r = WorkloadRng::new(7);
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = r.exponential(40.0);
            assert!(x.is_finite() && x >= 0.0);
            sum += x;
        }
        let mean = sum / n as f64;
        assert!((mean - 40.0).abs() < 2.0, "sample mean {mean}");
    }
}
