use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

use super::Measurement;

/// Aggregated measurements of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStats {
    /// How many times the region ran.
    pub calls: u64,
    /// Sum of the wall time of all runs.
    pub total_wall: Duration,
    /// The slowest run.
    pub max_wall: Duration,
    /// Sum of the CPU time of all runs that reported one.
    pub total_cpu: Duration,
}

impl RegionStats {
    /// Fold one more measurement in.
    pub fn add(&mut self, measurement: &Measurement) {
        self.calls += 1;
        self.total_wall += measurement.wall;
        self.max_wall = self.max_wall.max(measurement.wall);
        self.total_cpu += measurement.cpu_time().unwrap_or_default();
    }

    /// Average wall time per run.
    pub fn mean_wall(&self) -> Duration {
        match u32::try_from(self.calls) {
            Ok(0) => Duration::ZERO,
            Ok(calls) => self.total_wall / calls,
            Err(_) => self.total_wall.div_f64(self.calls as f64),
        }
    }
}

/// Thread-safe accumulator of region measurements, keyed by region name.
///
/// The lock is only held while folding in a finished measurement, never
/// during a computation.
#[derive(Debug, Default)]
pub struct Profile {
    regions: Mutex<BTreeMap<&'static str, RegionStats>>,
}

impl Profile {
    /// Record one measurement of `region`.
    pub fn record(&self, region: &'static str, measurement: &Measurement) {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(region)
            .or_default()
            .add(measurement);
    }

    /// A copy of the current statistics, ordered by region name.
    pub fn snapshot(&self) -> BTreeMap<&'static str, RegionStats> {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
