//! Selectors
//!
//! Read-only views over [`PlanState`] used by the UI and by middleware.

use crate::domain_models::{Plan, TimerId};
use crate::state::{AiAssistantFeature, PlanState};

pub fn ai_assistant_feature(state: &PlanState) -> &AiAssistantFeature {
    &state.features.ai_assistant
}

pub fn is_requesting_ai_assistant_feature(state: &PlanState) -> bool {
    state.features.ai_assistant.meta.is_requesting
}

pub fn async_request_countdown(state: &PlanState) -> i64 {
    state.features.ai_assistant.meta.async_request_countdown
}

pub fn async_request_timer_id(state: &PlanState) -> TimerId {
    state.features.ai_assistant.meta.async_request_timer_id
}

/// Find a plan by its product slug
pub fn plan<'a>(state: &'a PlanState, product_slug: &str) -> Option<&'a Plan> {
    state
        .plans
        .iter()
        .find(|plan| plan.product_slug.as_deref() == Some(product_slug))
}

pub fn has_requests_left(state: &PlanState) -> bool {
    !state.features.ai_assistant.is_over_limit
}

/// Requests left before the limit, None once over the limit
///
/// Agrees with [`has_requests_left`]: a forced `is_over_limit` means no
/// requests left, whatever the counters say.
pub fn requests_left(state: &PlanState) -> Option<u64> {
    let feature = &state.features.ai_assistant;
    if feature.is_over_limit {
        return None;
    }
    feature
        .requests_limit
        .checked_sub(feature.requests_count)
        .filter(|left| *left > 0)
}
