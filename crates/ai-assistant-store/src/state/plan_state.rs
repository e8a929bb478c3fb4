//! Root store state

use serde::{Deserialize, Serialize};

use super::AiAssistantFeature;
use crate::domain_models::Plan;

/// Root state of the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanState {
    pub plans: Vec<Plan>,
    pub features: FeaturesState,
}

/// Per-feature state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesState {
    pub ai_assistant: AiAssistantFeature,
}
