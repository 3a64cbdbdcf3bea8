// This is loosely based on: https://docs.rs/command-rusage
// Licensed under MIT.

use std::ptr::addr_of_mut;
use std::time::Duration;

use super::RUsage;

/// On Linux the usage of the calling thread alone is available, elsewhere
/// the whole process is measured.
#[cfg(target_os = "linux")]
const RUSAGE_WHO: libc::c_int = libc::RUSAGE_THREAD;
#[cfg(not(target_os = "linux"))]
const RUSAGE_WHO: libc::c_int = libc::RUSAGE_SELF;

/// Returns an empty `libc::rusage` struct.
unsafe fn empty_raw_rusage() -> libc::rusage {
    std::mem::zeroed()
}

/// Query `getrusage` for the calling thread.
pub(super) fn thread_rusage() -> Option<RUsage> {
    let mut rusage;
    let status;

    // SAFETY: `rusage` is a valid, writable `libc::rusage` for the duration
    // of the call, which is all `getrusage` requires.
    unsafe {
        rusage = empty_raw_rusage();
        status = libc::getrusage(RUSAGE_WHO, addr_of_mut!(rusage));
    }

    if status != 0 {
        return None;
    }

    Some(RUsage {
        utime: duration_from_timeval(rusage.ru_utime),
        stime: duration_from_timeval(rusage.ru_stime),
        maxrss: rusage.ru_maxrss as usize,
        minflt: rusage.ru_minflt as usize,
        majflt: rusage.ru_majflt as usize,
        nvcsw: rusage.ru_nvcsw as usize,
        nivcsw: rusage.ru_nivcsw as usize,
    })
}

/// Converts a `libc::timeval` to a `std::time::Duration`.
fn duration_from_timeval(timeval: libc::timeval) -> Duration {
    Duration::new(timeval.tv_sec as u64, (timeval.tv_usec * 1000) as u32)
}
