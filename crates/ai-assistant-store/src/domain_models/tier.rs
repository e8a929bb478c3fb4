//! Tier model
//!
//! A named quota level of the AI assistant feature.

use serde::{Deserialize, Serialize};

use crate::constants::{
    TIER_FREE_SLUG, TIER_FREE_VALUE, TIER_UNLIMITED_LIMIT, TIER_UNLIMITED_SLUG,
    TIER_UNLIMITED_VALUE,
};

/// Missing keys default to empty/zero so a partial tier from the server
/// is kept as sent instead of rejecting the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub value: u64,
    #[serde(default)]
    pub limit: u64,
    /// Human readable limit, e.g. "Unlimited"
    #[serde(
        default,
        alias = "readable-limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub readable_limit: Option<String>,
}

impl Tier {
    /// The free tier, capped at `limit` requests
    pub fn free(limit: u64) -> Self {
        Self {
            slug: TIER_FREE_SLUG.to_string(),
            value: TIER_FREE_VALUE,
            limit,
            readable_limit: None,
        }
    }

    /// The unlimited tier, labelled with `readable_limit`
    pub fn unlimited(readable_limit: impl Into<String>) -> Self {
        Self {
            slug: TIER_UNLIMITED_SLUG.to_string(),
            value: TIER_UNLIMITED_VALUE,
            limit: TIER_UNLIMITED_LIMIT,
            readable_limit: Some(readable_limit.into()),
        }
    }
}
