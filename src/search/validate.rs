use crate::search::{Plan, Problem, ValidationError};

/// Replay `plan` from `initial_state`, checking that every step is one of the
/// actions the problem enumerates at that point and that the final state is
/// a goal.
pub fn validate<P>(
    problem: &P,
    initial_state: &P::State,
    plan: &Plan<P::Action>,
) -> Result<(), ValidationError>
where
    P: Problem,
    P::Action: PartialEq,
{
    let mut cur_state = initial_state.clone();
    for (step, action) in plan.iter().enumerate() {
        if !problem.actions(&cur_state).contains(action) {
            return Err(ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", cur_state),
            });
        }

        cur_state = problem.successor(&cur_state, action);
    }

    if !problem.is_goal(&cur_state) {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(())
}
