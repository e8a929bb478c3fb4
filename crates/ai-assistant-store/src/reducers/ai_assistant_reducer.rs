//! AI Assistant Reducer
//!
//! Handles the AI assistant feature slice. Usage counters are updated
//! optimistically with the same rules the server applies; the server's view
//! replaces them wholesale on the next `StoreAiAssistantFeature`.

use crate::actions::Action;
use crate::constants::ASYNC_REQUEST_COUNTDOWN_INIT_VALUE;
use crate::domain_models::TimerId;
use crate::state::{AiAssistantFeature, FeatureMeta};

/// Reducer for the AI assistant feature state
pub fn reduce(mut state: AiAssistantFeature, action: &Action) -> AiAssistantFeature {
    match action {
        Action::RequestAiAssistantFeature => {
            state.meta.is_requesting = true;
            state.meta.async_request_countdown = ASYNC_REQUEST_COUNTDOWN_INIT_VALUE;
            state.meta.async_request_timer_id = TimerId::NONE;
        }

        Action::StoreAiAssistantFeature { feature } => {
            let meta = FeatureMeta {
                is_requesting: false,
                ..state.meta
            };
            state = AiAssistantFeature {
                meta,
                ..(**feature).clone()
            };
        }

        Action::IncreaseAiAssistantRequestsCount { count } => {
            state.requests_count = state.requests_count.saturating_add(*count);
            state.is_over_limit = state.requests_count >= state.requests_limit;
            state.require_upgrade = state.is_over_limit && !state.has_feature;

            let mut usage_period = state.usage_period.take().unwrap_or_default();
            usage_period.requests_count = usage_period.requests_count.saturating_add(*count);
            state.usage_period = Some(usage_period);

            if state.require_upgrade {
                log::debug!(
                    "AI assistant over limit: {}/{} requests, upgrade required",
                    state.requests_count,
                    state.requests_limit
                );
            }
        }

        Action::DecreaseNewAsyncRequestCountdown => {
            state.meta.async_request_countdown = state.meta.async_request_countdown.saturating_sub(1);
        }

        Action::EnqueueAsyncRequest { timer_id } => {
            state.meta.async_request_timer_id = *timer_id;
        }

        Action::SetAiAssistantFeatureRequireUpgrade { require_upgrade } => {
            state.require_upgrade = *require_upgrade;
            state.has_feature = !*require_upgrade;
            // Forced even when the upgrade requirement is lifted
            state.is_over_limit = true;
        }

        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}
