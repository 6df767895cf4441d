//! The `combinator` package provides `Termination` conditions that combine
//! two other conditions with a logical operation.

use crate::evolve::GenerationState;
use crate::termination::{StopFlag, Termination};

/// Combines two `Termination` conditions; the run stops as soon as either
/// condition is met.
pub fn or<A, B>(condition_a: A, condition_b: B) -> Or<A, B>
where
    A: Termination,
    B: Termination,
{
    Or {
        condition_a,
        condition_b,
    }
}

/// A `Termination` condition that stops the run when either of its two
/// inner conditions stops it.
#[derive(Clone, Debug, PartialEq)]
pub struct Or<A, B>
where
    A: Termination,
    B: Termination,
{
    condition_a: A,
    condition_b: B,
}

impl<A, B> Termination for Or<A, B>
where
    A: Termination,
    B: Termination,
{
    fn evaluate(&mut self, state: &GenerationState) -> StopFlag {
        match self.condition_a.evaluate(state) {
            StopFlag::StopNow(reason) => StopFlag::StopNow(reason),
            StopFlag::Continue => self.condition_b.evaluate(state),
        }
    }

    fn reset(&mut self) {
        self.condition_a.reset();
        self.condition_b.reset();
    }
}
