use crate::search::{
    search_engines::{AStar, BFS, DFS, GBFS, UCS},
    Heuristic, Plan, Problem, SearchError, SearchStatistics, TerminationCondition,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    ProvablyUnsolvable,
    /// The search hit its maximum number of expansions
    ExpansionLimitExceeded,
    /// The search ran out of time
    TimeLimitExceeded,
    /// The search ran out of memory
    MemoryLimitExceeded,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }

    /// Collapse the result into the plain solution type: the actions of the
    /// plan, or `None` for every way of not finding one.
    pub fn into_solution(self) -> Option<Vec<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan.into_steps()),
            _ => None,
        }
    }
}

pub trait SearchEngine<P>
where
    P: Problem,
{
    /// Search from an explicitly given state instead of the problem's initial
    /// state.
    fn search_from(
        &mut self,
        problem: &P,
        initial_state: P::State,
        termination: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics);

    fn search(
        &mut self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        self.search_from(problem, problem.initial_state(), termination)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum SearchEngineName {
    #[serde(rename = "bfs")]
    #[strum(serialize = "bfs")]
    BFS,
    #[serde(rename = "dfs")]
    #[strum(serialize = "dfs")]
    DFS,
    #[serde(rename = "ucs")]
    #[strum(serialize = "ucs")]
    UCS,
    #[serde(rename = "astar")]
    #[strum(serialize = "astar")]
    AStar,
    #[serde(rename = "gbfs")]
    #[strum(serialize = "gbfs")]
    GBFS,
}

impl SearchEngineName {
    /// Whether the engine needs a heuristic.
    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::AStar | SearchEngineName::GBFS)
    }

    /// Whether the engine is guaranteed to return a cheapest plan. For A*
    /// this only holds with an admissible heuristic.
    pub fn is_cost_optimal(&self) -> bool {
        matches!(self, SearchEngineName::UCS | SearchEngineName::AStar)
    }

    /// Create the engine. Uninformed engines ignore `heuristic`; informed
    /// ones fail without it.
    pub fn create<'h, P>(
        &self,
        heuristic: Option<&'h dyn Heuristic<P>>,
    ) -> Result<Box<dyn SearchEngine<P> + 'h>, SearchError>
    where
        P: Problem + 'h,
    {
        let engine: Box<dyn SearchEngine<P> + 'h> = match self {
            SearchEngineName::BFS => Box::new(BFS::new()),
            SearchEngineName::DFS => Box::new(DFS::new()),
            SearchEngineName::UCS => Box::new(UCS::new()),
            SearchEngineName::AStar => Box::new(AStar::new(
                heuristic.ok_or(SearchError::MissingHeuristic(*self))?,
            )),
            SearchEngineName::GBFS => Box::new(GBFS::new(
                heuristic.ok_or(SearchError::MissingHeuristic(*self))?,
            )),
        };
        Ok(engine)
    }
}
