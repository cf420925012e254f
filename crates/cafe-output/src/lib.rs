//! `cafe-output` — CSV exports for the simulator.
//!
//! | File                                | Writer             | One row per        |
//! |-------------------------------------|--------------------|--------------------|
//! | `simulation_results_test{n}.csv`    | `ResultsCsvWriter` | processed order    |
//! | `simulation_dataset_inputs.csv`     | `DatasetCsvWriter` | generated order    |
//!
//! Arrival times are printed as clock-of-day, with simulated time zero at
//! 07:00.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cafe_output::export_run;
//!
//! let run = service.run_simulation(2)?;
//! let path = export_run(Path::new("./output"), run)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;

#[cfg(test)]
mod tests;

pub use crate::csv::{
    DATASET_FILE, DATASET_HEADER, DatasetCsvWriter, RESULTS_HEADER, ResultsCsvWriter, export_dataset,
    export_run, results_file_name,
};
pub use error::{OutputError, OutputResult};
pub use row::{DatasetRow, ResultRow, SESSION_OPEN_SECS, clock_of_day};
