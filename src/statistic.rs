//! The `statistic` module provides functionality to collect timing
//! statistics about the execution of the evolutionary pipeline.

use chrono::{Duration, Local};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, AddAssign};

/// Accumulated time spent processing pipeline stages. In case of parallel
/// processing it is the wall time of each stage, i.e. the time between a
/// stage's first tile starting and its last tile joining.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProcessingTime(Duration);

impl ProcessingTime {
    /// Returns the zero value of `ProcessingTime`.
    pub fn zero() -> Self {
        ProcessingTime(Duration::zero())
    }

    /// Returns the accumulated duration.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl Add for ProcessingTime {
    type Output = ProcessingTime;
    fn add(self, other: Self) -> Self::Output {
        ProcessingTime(self.0 + other.0)
    }
}

impl AddAssign for ProcessingTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0 + other.0
    }
}

impl Debug for ProcessingTime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for ProcessingTime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A not yet executed operation whose execution will be timed.
pub struct Timed<F> {
    function: F,
}

/// The outcome of a timed operation together with the time its execution
/// took.
pub struct TimedResult<U> {
    pub result: U,
    pub time: ProcessingTime,
}

/// Wraps an operation for timed execution.
pub fn timed<F>(op: F) -> Timed<F> {
    Timed { function: op }
}

impl<F> Timed<F> {
    /// Runs the wrapped operation and records its execution time.
    pub fn run<U>(self) -> TimedResult<U>
    where
        F: FnOnce() -> U,
    {
        let started_at = Local::now();
        let result = (self.function)();
        let time = Local::now().signed_duration_since(started_at);
        TimedResult {
            result,
            time: ProcessingTime(time),
        }
    }
}
