//! AI Assistant feature state

use ai_assistant_config::store_config::DEFAULT_FREE_PLAN_REQUESTS_LIMIT;
use ai_assistant_config::StoreConfig;
use serde::{Deserialize, Serialize};

use crate::bootstrap::AiAssistantBootstrap;
use crate::constants::{ASYNC_REQUEST_COUNTDOWN_INIT_VALUE, DEFAULT_UPGRADE_TYPE};
use crate::domain_models::{Tier, TimerId, UsagePeriod};

/// Plan and usage data of the AI assistant feature
///
/// This is also the payload of `Action::StoreAiAssistantFeature`, so every
/// field tolerates being absent on the wire.
///
/// The two defaults differ on purpose for `usage_period`: [`Default`] is the
/// seeded initial state and carries a usage period, while a payload without
/// `usagePeriod` stores `None`. The server's record replaces the previous one
/// as sent, and the next request count increase starts a fresh period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssistantFeature {
    #[serde(default)]
    pub has_feature: bool,
    #[serde(default)]
    pub is_over_limit: bool,
    #[serde(default)]
    pub requests_count: u64,
    #[serde(default = "default_requests_limit")]
    pub requests_limit: u64,
    #[serde(default)]
    pub require_upgrade: bool,
    #[serde(default)]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default = "default_upgrade_type")]
    pub upgrade_type: String,
    #[serde(default = "default_current_tier")]
    pub current_tier: Tier,
    #[serde(default = "default_next_tier")]
    pub next_tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_period: Option<UsagePeriod>,
    #[serde(rename = "_meta", default)]
    pub meta: FeatureMeta,
}

fn default_requests_limit() -> u64 {
    DEFAULT_FREE_PLAN_REQUESTS_LIMIT
}

fn default_upgrade_type() -> String {
    DEFAULT_UPGRADE_TYPE.to_string()
}

fn default_current_tier() -> Tier {
    Tier::free(DEFAULT_FREE_PLAN_REQUESTS_LIMIT)
}

fn default_next_tier() -> Tier {
    Tier::unlimited(StoreConfig::default().unlimited_label)
}

impl Default for AiAssistantFeature {
    fn default() -> Self {
        AiAssistantBootstrap::default().into_feature(&StoreConfig::default())
    }
}

/// Transient UI bookkeeping for the in-flight and deferred feature requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureMeta {
    pub is_requesting: bool,
    /// Counts down on every request; the deferred sync is scheduled once it
    /// runs out. Not clamped, it goes negative.
    pub async_request_countdown: i64,
    pub async_request_timer_id: TimerId,
}

impl Default for FeatureMeta {
    fn default() -> Self {
        Self {
            is_requesting: false,
            async_request_countdown: ASYNC_REQUEST_COUNTDOWN_INIT_VALUE,
            async_request_timer_id: TimerId::NONE,
        }
    }
}
