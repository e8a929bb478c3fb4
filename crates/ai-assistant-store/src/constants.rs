//! Store constants

/// Value the async request countdown starts from (and is reset to on every
/// feature request)
pub const ASYNC_REQUEST_COUNTDOWN_INIT_VALUE: i64 = 3;

pub const TIER_FREE_SLUG: &str = "ai-assistant-tier-free";
pub const TIER_FREE_VALUE: u64 = 0;

pub const TIER_UNLIMITED_SLUG: &str = "ai-assistant-tier-unlimited";
pub const TIER_UNLIMITED_VALUE: u64 = 1;
pub const TIER_UNLIMITED_LIMIT: u64 = 922_337_203_685_477_600;

/// Upgrade type used when the server does not report one
pub const DEFAULT_UPGRADE_TYPE: &str = "default";

/// Start marker of the usage period when the server does not report one
pub const DEFAULT_USAGE_PERIOD_START: &str = TIER_FREE_SLUG;
