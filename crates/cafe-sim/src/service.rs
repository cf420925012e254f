//! `SimulationService` — runs named tests and keeps their history.

use cafe_core::{Order, SimConfig};
use cafe_workload::{TestProfile, WorkloadGenerator};
use tracing::info;

use crate::{EventSimulator, NoopObserver, SimError, SimResult, TestRun};

/// Owns the simulation settings and the per-test result history.
///
/// History holds at most one [`TestRun`] per test number, sorted by test
/// number.  Re-running a test replaces its entry.
#[derive(Debug, Default)]
pub struct SimulationService {
    config:  SimConfig,
    history: Vec<TestRun>,
}

impl SimulationService {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate().map_err(|e| SimError::Config(e.to_string()))?;
        Ok(Self { config, history: Vec::new() })
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The arrival stream test `test_number` replays.
    pub fn workload(&self, test_number: u32) -> SimResult<Vec<Order>> {
        let generator = WorkloadGenerator::new(&self.config);
        let orders = generator.generate(
            test_number,
            TestProfile::order_count(test_number),
            self.config.seed_for(test_number),
        )?;
        Ok(orders)
    }

    /// Generate and replay test `test_number` without touching history.
    pub fn execute(&self, test_number: u32) -> SimResult<TestRun> {
        let profile = TestProfile::for_test(test_number);
        let orders = self.workload(test_number)?;
        let requested = orders.len();

        let simulator = EventSimulator::new(self.config.worker_count)?;
        let outcome = simulator.run(orders, &mut NoopObserver)?;
        Ok(TestRun::from_outcome(test_number, profile.name, requested, outcome))
    }

    /// Run test `test_number`, record it in history and return it.
    pub fn run_simulation(&mut self, test_number: u32) -> SimResult<&TestRun> {
        let run = self.execute(test_number)?;
        log_run(&run);
        Ok(self.record(run))
    }

    /// Run several tests and record each one.
    ///
    /// With the `parallel` feature the runs execute on Rayon's pool; each
    /// run is deterministic, so the recorded results do not depend on it.
    pub fn run_batch(&mut self, test_numbers: &[u32]) -> SimResult<()> {
        #[cfg(feature = "parallel")]
        let runs: Vec<SimResult<TestRun>> = {
            use rayon::prelude::*;
            test_numbers.par_iter().map(|&n| self.execute(n)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let runs: Vec<SimResult<TestRun>> = test_numbers.iter().map(|&n| self.execute(n)).collect();

        for run in runs {
            let run = run?;
            log_run(&run);
            self.record(run);
        }
        Ok(())
    }

    /// Every recorded run, sorted by test number.
    #[inline]
    pub fn history(&self) -> &[TestRun] {
        &self.history
    }

    /// The recorded run for `test_number`, if any.
    pub fn get(&self, test_number: u32) -> Option<&TestRun> {
        self.history
            .binary_search_by_key(&test_number, TestRun::test_number)
            .ok()
            .map(|i| &self.history[i])
    }

    fn record(&mut self, run: TestRun) -> &TestRun {
        let i = match self.history.binary_search_by_key(&run.test_number(), TestRun::test_number) {
            Ok(i) => {
                self.history[i] = run;
                i
            }
            Err(i) => {
                self.history.insert(i, run);
                i
            }
        };
        &self.history[i]
    }
}

fn log_run(run: &TestRun) {
    info!(
        test = run.test_number(),
        profile = run.profile_name(),
        orders = run.total_orders(),
        avg_wait_min = format_args!("{:.2}", run.avg_wait_minutes()),
        max_wait_min = format_args!("{:.2}", run.max_wait_minutes()),
        sla_violations = run.sla_violations(),
        workers = ?run.worker_counts(),
        "test run complete"
    );
}
