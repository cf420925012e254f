//! CSV export backend.
//!
//! Two file kinds:
//! - `simulation_results_test{n}.csv`: one row per processed order of a run
//! - `simulation_dataset_inputs.csv`: the generated input stream of any
//!   number of tests

use std::fs::File;
use std::path::{Path, PathBuf};

use cafe_core::Order;
use cafe_sim::TestRun;
use csv::Writer;
use tracing::info;

use crate::{DatasetRow, OutputResult, ResultRow};

pub const RESULTS_HEADER: [&str; 7] = [
    "Test ID",
    "Customer",
    "Drink",
    "Arrival Time",
    "Wait Time (min)",
    "Priority Score",
    "Reason",
];

pub const DATASET_HEADER: [&str; 5] = [
    "Test_ID",
    "Customer_Name",
    "Drink_Type",
    "Arrival_Time",
    "Is_Loyal_Member",
];

pub const DATASET_FILE: &str = "simulation_dataset_inputs.csv";

const CLOCK_FORMAT: &str = "%H:%M:%S";

/// File name of the results export for `test_number`.
pub fn results_file_name(test_number: u32) -> String {
    format!("simulation_results_test{test_number}.csv")
}

// ── Shared writer ─────────────────────────────────────────────────────────────

/// A CSV file with a header row, a row counter, and an idempotent flush.
struct CountingWriter {
    inner:    Writer<File>,
    rows:     usize,
    finished: bool,
}

impl CountingWriter {
    fn create(path: &Path, header: &[&str]) -> OutputResult<Self> {
        let mut inner = Writer::from_path(path)?;
        inner.write_record(header)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    fn write_record(&mut self, record: &[String]) -> OutputResult<()> {
        self.inner.write_record(record)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Writes the per-order results of test runs.
pub struct ResultsCsvWriter {
    out: CountingWriter,
}

impl ResultsCsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self { out: CountingWriter::create(path, &RESULTS_HEADER)? })
    }

    /// Append every order of `run`, in arrival order.
    pub fn write_run(&mut self, run: &TestRun) -> OutputResult<()> {
        for order in run.orders() {
            self.write_row(&ResultRow::from_order(run.test_number(), order))?;
        }
        Ok(())
    }

    pub fn write_row(&mut self, row: &ResultRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.test_number.to_string(),
            row.customer.clone(),
            row.drink.to_owned(),
            row.arrival.format(CLOCK_FORMAT).to_string(),
            format!("{:.1}", row.wait_minutes),
            format!("{:.1}", row.priority_score),
            row.reason.to_owned(),
        ])
    }

    #[inline]
    pub fn rows_written(&self) -> usize {
        self.out.rows
    }

    /// Flush the underlying file.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.out.finish()
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Writes generated input streams.
pub struct DatasetCsvWriter {
    out: CountingWriter,
}

impl DatasetCsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self { out: CountingWriter::create(path, &DATASET_HEADER)? })
    }

    /// Append the stream of `test_number`, sorted by arrival.
    pub fn write_orders(&mut self, test_number: u32, orders: &[Order]) -> OutputResult<()> {
        let mut sorted: Vec<&Order> = orders.iter().collect();
        sorted.sort_by_key(|o| o.arrival());
        for order in sorted {
            self.write_row(&DatasetRow::from_order(test_number, order))?;
        }
        Ok(())
    }

    pub fn write_row(&mut self, row: &DatasetRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.test_number.to_string(),
            row.customer.clone(),
            row.drink.to_owned(),
            row.arrival.format(CLOCK_FORMAT).to_string(),
            row.is_loyal.to_string(),
        ])
    }

    #[inline]
    pub fn rows_written(&self) -> usize {
        self.out.rows
    }

    /// Flush the underlying file.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.out.finish()
    }
}

// ── One-shot helpers ──────────────────────────────────────────────────────────

/// Write `run` to `dir/simulation_results_test{n}.csv`, returning the path.
pub fn export_run(dir: &Path, run: &TestRun) -> OutputResult<PathBuf> {
    let path = dir.join(results_file_name(run.test_number()));
    let mut writer = ResultsCsvWriter::create(&path)?;
    writer.write_run(run)?;
    writer.finish()?;
    info!(path = %path.display(), rows = writer.rows_written(), "results exported");
    Ok(path)
}

/// Write each `(test_number, orders)` stream to `dir/simulation_dataset_inputs.csv`.
pub fn export_dataset<'a, I>(dir: &Path, streams: I) -> OutputResult<PathBuf>
where
    I: IntoIterator<Item = (u32, &'a [Order])>,
{
    let path = dir.join(DATASET_FILE);
    let mut writer = DatasetCsvWriter::create(&path)?;
    for (test_number, orders) in streams {
        writer.write_orders(test_number, orders)?;
    }
    writer.finish()?;
    info!(path = %path.display(), rows = writer.rows_written(), "dataset exported");
    Ok(path)
}
