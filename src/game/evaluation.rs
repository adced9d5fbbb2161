//! Static evaluation of game states.
//!
//! Evaluators are passed to the engines as values. Any closure
//! `Fn(&S) -> f64` is an evaluator.

/// Static state evaluator. Higher is better for the controlled agent.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// States that carry a running game score.
pub trait Scored {
    fn score(&self) -> f64;
}

/// Evaluates a state by its game score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluation;

impl<S: Scored> Evaluator<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tally(i32);

    impl Scored for Tally {
        fn score(&self) -> f64 {
            self.0 as f64
        }
    }

    #[test]
    fn test_score_evaluation() {
        assert_eq!(ScoreEvaluation.evaluate(&Tally(-7)), -7.0);
    }

    #[test]
    fn test_closure_evaluator() {
        let doubled = |t: &Tally| t.0 as f64 * 2.0;
        assert_eq!(doubled.evaluate(&Tally(4)), 8.0);
    }
}
