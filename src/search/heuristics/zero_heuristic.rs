use crate::search::{Heuristic, HeuristicValue, Problem};

/// The heuristic that always returns zero. It is trivially admissible, and
/// turns A* into uniform cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P> Heuristic<P> for ZeroHeuristic
where
    P: Problem + ?Sized,
{
    fn evaluate(&self, _problem: &P, _state: &P::State) -> HeuristicValue {
        (0.).into()
    }
}
