use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::trace;
use serde::Deserialize;
use serde::Serialize;

use crate::config::duration::deserialize_human_time_duration;
use crate::config::duration::serialize_duration;

/// Aggregation of measurements per region.
pub mod profile;

#[cfg(unix)]
mod rusage_unix;

pub use self::profile::Profile;
pub use self::profile::RegionStats;

/// The measurement of one instrumented computation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Interval of wall time.
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_human_time_duration"
    )]
    pub wall: Duration,

    /// The resource usage of the computing thread during the interval.
    pub rusage: Option<RUsage>,
}

impl Measurement {
    /// User plus system CPU time, if resource usage is available.
    pub fn cpu_time(&self) -> Option<Duration> {
        self.rusage.map(|r| r.utime + r.stime)
    }
}

/// Resource usage statistics for a thread.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RUsage {
    /// User CPU time used.
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_human_time_duration"
    )]
    pub utime: Duration,
    /// System CPU time used.
    #[serde(
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_human_time_duration"
    )]
    pub stime: Duration,
    /// Maximum resident set size.
    pub maxrss: usize,
    /// Page reclaims (soft page faults).
    pub minflt: usize,
    /// Page faults (hard page faults).
    pub majflt: usize,
    /// Voluntary context switches.
    pub nvcsw: usize,
    /// Involuntary context switches.
    pub nivcsw: usize,
}

impl RUsage {
    /// The usage accumulated between `earlier` and `self`.
    ///
    /// `maxrss` is a high-water mark, so the later value is kept as is.
    pub fn since(&self, earlier: &RUsage) -> RUsage {
        RUsage {
            utime: self.utime.saturating_sub(earlier.utime),
            stime: self.stime.saturating_sub(earlier.stime),
            maxrss: self.maxrss,
            minflt: self.minflt.saturating_sub(earlier.minflt),
            majflt: self.majflt.saturating_sub(earlier.majflt),
            nvcsw: self.nvcsw.saturating_sub(earlier.nvcsw),
            nivcsw: self.nivcsw.saturating_sub(earlier.nivcsw),
        }
    }
}

/// The resource usage of the calling thread so far.
#[cfg(unix)]
pub fn current_rusage() -> Option<RUsage> {
    rusage_unix::thread_rusage()
}

/// The resource usage of the calling thread so far.
#[cfg(not(unix))]
pub fn current_rusage() -> Option<RUsage> {
    None
}

/// This is an extensible structure for measuring monotonic metrics.
struct Clock {
    wall_time: Instant,
    rusage: Option<RUsage>,
}

/// Start the measurement, returns a new instance of a [Clock].
fn start_measuring() -> Clock {
    Clock {
        wall_time: Instant::now(),
        rusage: current_rusage(),
    }
}

/// Stop a measurement, returns a new instance of a [Measurement].
fn stop_measuring(clk: Clock) -> Measurement {
    let wall = clk.wall_time.elapsed();

    let rusage = match (clk.rusage, current_rusage()) {
        (Some(before), Some(after)) => Some(after.since(&before)),
        _ => None,
    };

    Measurement { wall, rusage }
}

/// Run `f` on the current thread and measure it.
///
/// The result of `f` is passed through untouched.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Measurement) {
    let clock = start_measuring();
    let result = f();
    (result, stop_measuring(clock))
}

/// A named unit of work, typically one request.
///
/// Creating and dropping a task is logged, regions measured within it are
/// recorded into the [Profile] when there is one.
#[derive(Debug)]
pub struct Task {
    name: &'static str,
    started: Instant,
    profile: Option<Arc<Profile>>,
}

impl Task {
    /// Start a new task.
    pub fn new(name: &'static str, profile: Option<Arc<Profile>>) -> Self {
        debug!("Task {name} started");

        Task {
            name,
            started: Instant::now(),
            profile,
        }
    }

    /// The name given to this task.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Attach a key/value pair to the task.
    pub fn log(&self, key: &str, value: impl Display) {
        debug!("Task {}: {key} = {value}", self.name);
    }

    /// Record a measurement taken elsewhere, for example on another thread.
    pub fn record(&self, region: &'static str, measurement: &Measurement) {
        trace!(
            "Task {}: region {region:?} took {:?} (cpu {:?})",
            self.name,
            measurement.wall,
            measurement.cpu_time()
        );

        if let Some(profile) = &self.profile {
            profile.record(region, measurement);
        }
    }

    /// Run `f` on the current thread as a measured region of this task.
    pub fn region<T>(&self, region: &'static str, f: impl FnOnce() -> T) -> (T, Measurement) {
        let (result, measurement) = measure(f);
        self.record(region, &measurement);
        (result, measurement)
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        debug!("Task {} finished in {:?}", self.name, self.started.elapsed());
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
