use crate::search::Problem;
use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the closest goal.
///
/// Heuristics are only used by the informed engines. The engines never check
/// admissibility: an overestimating heuristic still terminates, it just loses
/// the optimality guarantee of A*.
pub trait Heuristic<P>
where
    P: Problem + ?Sized,
{
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&self, problem: &P, state: &P::State) -> HeuristicValue;
}

/// Plain functions and closures of the shape `(problem, state) -> estimate`
/// are heuristics.
impl<P, F> Heuristic<P> for F
where
    P: Problem + ?Sized,
    F: Fn(&P, &P::State) -> f64,
{
    fn evaluate(&self, problem: &P, state: &P::State) -> HeuristicValue {
        OrderedFloat(self(problem, state))
    }
}
