//! Wall-clock run diagnostics.
//!
//! The engine records how long a `run` call took and the average duration of
//! one model step. These are diagnostic outputs only; they never feed back
//! into the simulated physics.

use std::time::Instant;

/// A simple timer that measures elapsed time.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create and start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in seconds since the timer was started.
    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Performance counters for the most recent `run` call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Number of full model steps executed.
    pub steps: u64,
    /// Total wall-clock duration of the run (seconds).
    pub run_duration_s: f64,
    /// Average wall-clock duration of one step (seconds).
    pub avg_step_s: f64,
}

impl RunStats {
    /// Build stats from a completed run. A zero-step run yields all-zero
    /// stats rather than a division fault.
    pub fn from_run(steps: u64, run_duration_s: f64) -> Self {
        let avg_step_s = if steps > 0 {
            run_duration_s / steps as f64
        } else {
            0.0
        };
        Self {
            steps,
            run_duration_s,
            avg_step_s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_has_zero_average() {
        let stats = RunStats::from_run(0, 0.0);
        assert_eq!(stats.avg_step_s, 0.0);
        assert_eq!(stats.run_duration_s, 0.0);
    }

    #[test]
    fn average_is_total_over_steps() {
        let stats = RunStats::from_run(4, 2.0);
        assert_eq!(stats.avg_step_s, 0.5);
    }

    #[test]
    fn timer_is_monotonic() {
        let timer = Timer::start();
        let a = timer.elapsed_seconds();
        let b = timer.elapsed_seconds();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
