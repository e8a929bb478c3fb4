use crate::actions::Action;
use crate::reducers::{ai_assistant_reducer, plans_reducer};
use crate::state::PlanState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
///
/// Never fails: actions no slice handles return the state unchanged.
pub fn reduce(mut state: PlanState, action: &Action) -> PlanState {
    if matches!(action, Action::Unknown) {
        log::trace!("Ignoring unknown action");
        return state;
    }

    state.plans = plans_reducer::reduce(state.plans, action);
    state.features.ai_assistant = ai_assistant_reducer::reduce(state.features.ai_assistant, action);

    state
}
