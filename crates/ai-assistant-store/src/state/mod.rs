//! Store State Module
//!
//! Contains the state types held by the store, organized by slice.

mod ai_assistant;
mod plan_state;

pub use ai_assistant::{AiAssistantFeature, FeatureMeta};
pub use plan_state::{FeaturesState, PlanState};
