//! Usage period model
//!
//! Billing window with its own request counter, independent of the lifetime count.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsagePeriod {
    pub current_start: String,
    pub next_start: String,
    pub requests_count: u64,
}
