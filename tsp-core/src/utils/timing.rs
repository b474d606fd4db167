#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use crate::utils::Float;
use std::time::{Duration, Instant};

/// Implements a simple performance timer used to measure solver runs.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in seconds as a float.
    pub fn elapsed_secs_as_float(&self) -> Float {
        self.start.elapsed().as_secs_f64()
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Returns elapsed time as duration.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs action and returns its result together with the time it took.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Timer::start();
        let result = action();

        (result, timer.elapsed())
    }

    /// Runs action and passes the time it took to the callback before returning the action's result.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let (result, duration) = Self::measure_duration(action);
        callback(duration);

        result
    }
}
