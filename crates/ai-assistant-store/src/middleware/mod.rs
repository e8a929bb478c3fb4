use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::PlanState;

pub mod logging;
pub mod usage_sync;

pub use logging::LoggingMiddleware;
pub use usage_sync::{RecordingScheduler, TimerScheduler, UsageSyncMiddleware};

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state, before this action is reduced
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &PlanState, dispatcher: &Dispatcher) -> bool;
}
