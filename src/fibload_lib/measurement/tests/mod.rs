use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::fibonacci::compute_sequence_report;
use crate::fibonacci::compute_term;

fn measurement(wall_millis: u64, cpu_millis: Option<u64>) -> Measurement {
    Measurement {
        wall: Duration::from_millis(wall_millis),
        rusage: cpu_millis.map(|cpu| RUsage {
            utime: Duration::from_millis(cpu),
            ..RUsage::default()
        }),
    }
}

#[test]
fn measure_passes_result_through_test() {
    let (term, _) = measure(|| compute_term(20));
    let (report, _) = measure(|| compute_sequence_report(3));

    assert_eq!(6765, term);
    assert_eq!("Fib(1)\t= 1\nFib(2)\t= 1\nFib(3)\t= 2", report);
}

#[test]
fn measure_reports_elapsed_time_test() {
    let (_, measured) = measure(|| std::thread::sleep(Duration::from_millis(5)));

    assert!(measured.wall >= Duration::from_millis(5));
}

#[cfg(unix)]
#[test]
fn measure_reports_rusage_test() {
    let (_, measured) = measure(|| compute_term(25));

    assert!(measured.rusage.is_some());
    assert!(measured.cpu_time().is_some());
}

#[test]
fn rusage_since_test() {
    let earlier = RUsage {
        utime: Duration::from_millis(10),
        stime: Duration::from_millis(3),
        maxrss: 100,
        minflt: 5,
        majflt: 0,
        nvcsw: 2,
        nivcsw: 1,
    };
    let later = RUsage {
        utime: Duration::from_millis(25),
        stime: Duration::from_millis(4),
        maxrss: 120,
        minflt: 9,
        majflt: 0,
        nvcsw: 2,
        nivcsw: 4,
    };

    assert_eq!(
        RUsage {
            utime: Duration::from_millis(15),
            stime: Duration::from_millis(1),
            maxrss: 120,
            minflt: 4,
            majflt: 0,
            nvcsw: 0,
            nivcsw: 3,
        },
        later.since(&earlier)
    );
}

#[test]
fn profile_aggregates_regions_test() {
    let profile = Profile::default();

    profile.record("a", &measurement(10, Some(8)));
    profile.record("a", &measurement(30, None));
    profile.record("b", &measurement(1, Some(1)));

    let snapshot = profile.snapshot();

    assert_eq!(
        RegionStats {
            calls: 2,
            total_wall: Duration::from_millis(40),
            max_wall: Duration::from_millis(30),
            total_cpu: Duration::from_millis(8),
        },
        snapshot["a"]
    );
    assert_eq!(Duration::from_millis(20), snapshot["a"].mean_wall());
    assert_eq!(1, snapshot["b"].calls);
    assert_eq!(vec!["a", "b"], snapshot.keys().copied().collect::<Vec<_>>());
}

#[test]
fn empty_region_mean_test() {
    assert_eq!(Duration::ZERO, RegionStats::default().mean_wall());
}

#[test]
fn task_records_into_profile_test() {
    let profile = Arc::new(Profile::default());
    let task = Task::new("UniqueFib", Some(profile.clone()));

    task.log("n value", 12);
    let (term, _) = task.region("Compute fibonacci (unique)", || compute_term(12));
    task.record("elsewhere", &measurement(2, None));
    drop(task);

    assert_eq!(144, term);

    let snapshot = profile.snapshot();
    assert_eq!(1, snapshot["Compute fibonacci (unique)"].calls);
    assert_eq!(1, snapshot["elsewhere"].calls);
}

#[test]
fn task_without_profile_test() {
    let task = Task::new("MultipleFib", None);
    let (report, _) = task.region("Compute fibonacci suite", || compute_sequence_report(2));

    assert_eq!("MultipleFib", task.name());
    assert_eq!("Fib(1)\t= 1\nFib(2)\t= 1", report);
}

#[test]
fn measurement_serializes_to_toml_test() {
    let serialized = toml::to_string(&measurement(1500, Some(1200))).unwrap();

    assert!(serialized.contains("wall = \"1s 500ms\""));
    assert!(serialized.contains("[rusage]"));
    assert!(serialized.contains("utime = \"1s 200ms\""));
}
