//! Actions module
//!
//! Every state change of the store is described by an [`Action`]. On the wire
//! an action is a JSON object tagged by `type`, with the payload next to it:
//!
//! ```json
//! { "type": "INCREASE_AI_ASSISTANT_REQUESTS_COUNT", "count": 2 }
//! ```
//!
//! Any `type` the store does not know deserializes to [`Action::Unknown`] and
//! passes through the reducer untouched.

use serde::{Deserialize, Serialize};

use crate::domain_models::{Plan, TimerId};
use crate::error::{Error, Result};
use crate::state::AiAssistantFeature;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// ## Plans
    /// Replace the list of available plans
    SetPlans { plans: Vec<Plan> },

    /// ## AI Assistant feature
    /// A feature fetch started
    RequestAiAssistantFeature,
    /// The authoritative feature state arrived from the server
    StoreAiAssistantFeature { feature: Box<AiAssistantFeature> },
    /// Requests were made; update the counters optimistically
    IncreaseAiAssistantRequestsCount {
        #[serde(default = "default_count")]
        count: u64,
    },
    /// One step closer to the deferred feature sync
    DecreaseNewAsyncRequestCountdown,
    /// A deferred feature sync was scheduled under `timer_id`
    EnqueueAsyncRequest {
        #[serde(rename = "timerId")]
        timer_id: TimerId,
    },
    /// Force the upgrade requirement, overriding the derived flags
    SetAiAssistantFeatureRequireUpgrade {
        #[serde(rename = "requireUpgrade", default = "default_require_upgrade")]
        require_upgrade: bool,
    },

    /// ## Commands (handled by middleware)
    /// Schedule the deferred feature sync, replacing any pending one
    ScheduleAiAssistantFeatureSync,

    /// Any action type this store does not handle
    #[serde(other)]
    Unknown,
}

fn default_count() -> u64 {
    1
}

fn default_require_upgrade() -> bool {
    true
}

/// Action creators
impl Action {
    pub fn set_plans(plans: Vec<Plan>) -> Self {
        Self::SetPlans { plans }
    }

    pub fn request_ai_assistant_feature() -> Self {
        Self::RequestAiAssistantFeature
    }

    pub fn store_ai_assistant_feature(feature: AiAssistantFeature) -> Self {
        Self::StoreAiAssistantFeature {
            feature: Box::new(feature),
        }
    }

    pub fn increase_ai_assistant_requests_count(count: u64) -> Self {
        Self::IncreaseAiAssistantRequestsCount { count }
    }

    pub fn decrease_new_async_request_countdown() -> Self {
        Self::DecreaseNewAsyncRequestCountdown
    }

    pub fn enqueue_async_request(timer_id: TimerId) -> Self {
        Self::EnqueueAsyncRequest { timer_id }
    }

    pub fn set_ai_assistant_feature_require_upgrade(require_upgrade: bool) -> Self {
        Self::SetAiAssistantFeatureRequireUpgrade { require_upgrade }
    }

    /// Parse a single action from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::InvalidAction)
    }

    /// Parse a JSON array of actions
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(Error::InvalidAction)
    }
}
