//! Bootstrap state
//!
//! The host page renders the feature state into the editor once, before the
//! store exists. It is parsed into [`EditorInitialState`] and passed to
//! [`initial_state`] at store creation.
//!
//! Missing fields fall back to documented defaults. Falsy values count as
//! missing: a zero request limit means the free plan limit, an empty upgrade
//! type means "default".

use ai_assistant_config::StoreConfig;
use serde::Deserialize;

use crate::constants::{DEFAULT_UPGRADE_TYPE, DEFAULT_USAGE_PERIOD_START};
use crate::domain_models::{Tier, UsagePeriod};
use crate::error::{Error, Result};
use crate::state::{AiAssistantFeature, FeatureMeta, FeaturesState, PlanState};

/// Server-rendered editor state, as injected into the page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorInitialState {
    #[serde(rename = "ai-assistant", default)]
    pub ai_assistant: Option<AiAssistantBootstrap>,
}

impl EditorInitialState {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::InvalidBootstrap)
    }
}

/// AI assistant section of the editor state
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AiAssistantBootstrap {
    pub has_feature: Option<bool>,
    pub is_over_limit: Option<bool>,
    pub requests_count: Option<u64>,
    pub requests_limit: Option<u64>,
    pub site_require_upgrade: Option<bool>,
    pub error_message: Option<String>,
    pub error_code: Option<String>,
    pub upgrade_type: Option<String>,
    pub current_tier: Option<Tier>,
    pub usage_period: Option<BootstrapUsagePeriod>,
    pub next_tier: Option<Tier>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BootstrapUsagePeriod {
    pub current_start: Option<String>,
    pub next_start: Option<String>,
    pub requests_count: Option<u64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl AiAssistantBootstrap {
    /// Resolve the bootstrap values against the configured fallbacks
    pub fn into_feature(self, config: &StoreConfig) -> AiAssistantFeature {
        let usage_period = self.usage_period.unwrap_or_default();

        AiAssistantFeature {
            has_feature: self.has_feature.unwrap_or(false),
            is_over_limit: self.is_over_limit.unwrap_or(false),
            requests_count: self.requests_count.unwrap_or(0),
            requests_limit: self
                .requests_limit
                .filter(|limit| *limit != 0)
                .unwrap_or(config.free_plan_requests_limit),
            require_upgrade: self.site_require_upgrade.unwrap_or(false),
            error_message: self.error_message.unwrap_or_default(),
            error_code: self.error_code,
            upgrade_type: non_empty(self.upgrade_type)
                .unwrap_or_else(|| DEFAULT_UPGRADE_TYPE.to_string()),
            current_tier: self
                .current_tier
                .unwrap_or_else(|| Tier::free(config.free_plan_requests_limit)),
            next_tier: self
                .next_tier
                .unwrap_or_else(|| Tier::unlimited(config.unlimited_label.clone())),
            usage_period: Some(UsagePeriod {
                current_start: non_empty(usage_period.current_start)
                    .unwrap_or_else(|| DEFAULT_USAGE_PERIOD_START.to_string()),
                next_start: usage_period.next_start.unwrap_or_default(),
                requests_count: usage_period.requests_count.unwrap_or(0),
            }),
            meta: FeatureMeta::default(),
        }
    }
}

/// Build the initial store state from the (optional) bootstrap state
pub fn initial_state(bootstrap: Option<&EditorInitialState>, config: &StoreConfig) -> PlanState {
    let ai_assistant = bootstrap
        .and_then(|state| state.ai_assistant.clone())
        .unwrap_or_default();

    if bootstrap.is_none() {
        log::debug!("No bootstrap state, using defaults");
    }

    PlanState {
        plans: Vec::new(),
        features: FeaturesState {
            ai_assistant: ai_assistant.into_feature(config),
        },
    }
}
