//! Integration tests for cafe-output.

#[cfg(test)]
mod row_tests {
    use cafe_core::{DrinkKind, Order, OrderId, Timestamp};
    use chrono::NaiveTime;

    use crate::row::{DatasetRow, ResultRow, clock_of_day};

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn session_starts_at_seven() {
        assert_eq!(clock_of_day(Timestamp::ZERO), hms(7, 0, 0));
        assert_eq!(clock_of_day(Timestamp::from_secs(125)), hms(7, 2, 5));
        assert_eq!(clock_of_day(Timestamp::from_secs(10_800)), hms(10, 0, 0));
    }

    #[test]
    fn clock_wraps_past_midnight() {
        assert_eq!(clock_of_day(Timestamp::from_secs(17 * 3_600 + 60)), hms(0, 1, 0));
    }

    #[test]
    fn result_row_from_completed_order() {
        let mut o = Order::new(OrderId(2001), "Test2-Cust1", vec![DrinkKind::Latte], true, Timestamp::from_secs(90))
            .unwrap();
        o.start(Timestamp::from_secs(90)).unwrap();
        o.complete(Timestamp::from_secs(90 + 240)).unwrap();

        let row = ResultRow::from_order(2, &o);
        assert_eq!(row.test_number, 2);
        assert_eq!(row.customer, "Test2-Cust1");
        assert_eq!(row.drink, "LATTE");
        assert_eq!(row.arrival, hms(7, 1, 30));
        assert!((row.wait_minutes - 4.0).abs() < 1e-9);
        assert_eq!(row.reason, "Standard");
    }

    #[test]
    fn pending_order_reports_zero_wait() {
        let o = Order::new(OrderId(1), "A", vec![DrinkKind::Espresso], false, Timestamp::ZERO).unwrap();
        assert_eq!(ResultRow::from_order(1, &o).wait_minutes, 0.0);
    }

    #[test]
    fn dataset_row_carries_loyalty() {
        let o = Order::new(OrderId(1), "A", vec![DrinkKind::ColdBrew], true, Timestamp::ZERO).unwrap();
        let row = DatasetRow::from_order(1, &o);
        assert_eq!(row.drink, "COLD_BREW");
        assert!(row.is_loyal);
    }
}

#[cfg(test)]
mod csv_tests {
    use cafe_core::{DrinkKind, Order, OrderId, SimConfig, Timestamp};
    use cafe_sim::SimulationService;
    use cafe_workload::{TestProfile, WorkloadGenerator};
    use tempfile::TempDir;

    use crate::{
        DATASET_FILE, DATASET_HEADER, DatasetCsvWriter, RESULTS_HEADER, ResultsCsvWriter, export_dataset,
        export_run, results_file_name,
    };

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn headers_written_on_create() {
        let dir = tmp();
        let results = dir.path().join("r.csv");
        let dataset = dir.path().join("d.csv");
        ResultsCsvWriter::create(&results).unwrap().finish().unwrap();
        DatasetCsvWriter::create(&dataset).unwrap().finish().unwrap();

        assert_eq!(headers(&results), RESULTS_HEADER);
        assert_eq!(headers(&dataset), DATASET_HEADER);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = ResultsCsvWriter::create(&dir.path().join("r.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut d = DatasetCsvWriter::create(&dir.path().join("d.csv")).unwrap();
        d.finish().unwrap();
        d.finish().unwrap();
    }

    #[test]
    fn header_is_not_counted_as_a_row() {
        let dir = tmp();
        let path = dir.path().join("r.csv");
        let mut service = SimulationService::new(SimConfig::default()).unwrap();
        let run = service.run_simulation(3).unwrap();

        let mut w = ResultsCsvWriter::create(&path).unwrap();
        assert_eq!(w.rows_written(), 0);
        w.write_run(run).unwrap();
        w.finish().unwrap();
        assert_eq!(w.rows_written(), run.orders().len());
        assert_eq!(records(&path).len(), w.rows_written());
    }

    #[test]
    fn dataset_rows_sorted_by_arrival() {
        let dir = tmp();
        let path = dir.path().join("d.csv");
        let orders = vec![
            Order::new(OrderId(2), "Late", vec![DrinkKind::Latte], false, Timestamp::from_secs(60)).unwrap(),
            Order::new(OrderId(1), "Early", vec![DrinkKind::Espresso], true, Timestamp::ZERO).unwrap(),
        ];
        let mut w = DatasetCsvWriter::create(&path).unwrap();
        w.write_orders(7, &orders).unwrap();
        w.finish().unwrap();
        assert_eq!(w.rows_written(), 2);

        let rows = records(&path);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "Early");
        assert_eq!(&rows[0][2], "ESPRESSO");
        assert_eq!(&rows[0][3], "07:00:00");
        assert_eq!(&rows[0][4], "true");
        assert_eq!(&rows[1][1], "Late");
        assert_eq!(&rows[1][3], "07:01:00");
        assert_eq!(&rows[1][4], "false");
    }

    #[test]
    fn run_export_has_one_row_per_order() {
        let dir = tmp();
        let mut service = SimulationService::new(SimConfig::default()).unwrap();
        let run = service.run_simulation(1).unwrap();

        let path = export_run(dir.path(), run).unwrap();
        assert_eq!(path, dir.path().join(results_file_name(1)));

        let rows = records(&path);
        assert_eq!(rows.len(), run.orders().len());
        assert!(rows.iter().all(|r| &r[0] == "1"));
        assert_eq!(&rows[0][1], run.orders()[0].customer_name());
        // Wait and score carry one decimal.
        assert!(rows[0][4].split('.').nth(1).is_some_and(|d| d.len() == 1));
        assert!(rows[0][5].split('.').nth(1).is_some_and(|d| d.len() == 1));
    }

    #[test]
    fn dataset_export_concatenates_streams() {
        let dir = tmp();
        let config = SimConfig::default();
        let generator = WorkloadGenerator::new(&config);
        let streams: Vec<(u32, Vec<Order>)> = (1..=2)
            .map(|n| (n, generator.generate(n, TestProfile::order_count(n), config.seed_for(n)).unwrap()))
            .collect();

        let path = export_dataset(dir.path(), streams.iter().map(|(n, o)| (*n, o.as_slice()))).unwrap();
        assert_eq!(path, dir.path().join(DATASET_FILE));

        let rows = records(&path);
        assert_eq!(rows.len(), 210 + 300);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[210][0], "2");
        assert_eq!(&rows[210][1], "Test2-Cust1");
    }
}
