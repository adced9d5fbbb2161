//! Heuristics guiding A*.

use super::definition::SearchProblem;

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// A* returns optimal plans only when the heuristic is consistent. The
/// engine does not verify this.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}

/// The trivial heuristic. Reduces A* to uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}

/// Function form of [`NullHeuristic`].
pub fn null_heuristic<P: SearchProblem + ?Sized>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}
