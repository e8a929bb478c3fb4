//! Slice reducers
//!
//! Each reducer owns one part of [`PlanState`](crate::state::PlanState) and is
//! orchestrated by the root reducer in [`crate::reducer`].

pub mod ai_assistant_reducer;
pub mod plans_reducer;
