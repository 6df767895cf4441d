//! Termination determines when to stop the evolutionary run. Common
//! termination conditions are:
//!
//! * A solution is found that satisfies a minimum score
//! * A fixed number of generations is reached
//! * ...or a combination of such termination conditions.
//!
//! Termination conditions are defined by implementing the `Termination`
//! trait. Each kind of condition is implemented as a separate type;
//! conditions are combined using the `or` combinator.

pub mod combinator;
pub use self::combinator::{or, Or};

pub mod limit;
pub use self::limit::{FitnessLimit, GenerationLimit};

use crate::evolve::GenerationState;

/// The reason why a run stopped, for display purposes.
pub type StopReason = String;

/// The outcome of evaluating a `Termination` condition after one
/// generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopFlag {
    /// The run shall continue with the next generation.
    Continue,
    /// The run shall stop now, for the given reason.
    StopNow(StopReason),
}

/// A `Termination` defines a condition when the run shall stop.
///
/// One implementation of the trait should only handle one single
/// termination condition; multiple conditions are combined through
/// `combinator`s.
pub trait Termination {
    /// Evaluates whether the termination condition is met.
    fn evaluate(&mut self, state: &GenerationState) -> StopFlag;

    /// Resets the state of this `Termination` condition. Needs to be
    /// implemented only by conditions with their own state, e.g. counters.
    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
