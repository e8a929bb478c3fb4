//! Domain models
//!
//! Value types shared by state, actions and bootstrap.

mod plan;
mod tier;
mod timer_id;
mod usage_period;

pub use plan::Plan;
pub use tier::Tier;
pub use timer_id::TimerId;
pub use usage_period::UsagePeriod;
