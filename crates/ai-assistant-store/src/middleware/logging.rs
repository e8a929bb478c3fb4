use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::PlanState;

/// LoggingMiddleware - logs every action with the usage it applies to
///
/// Request counting is logged at info level with the counters it starts
/// from; everything else at debug level.
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &PlanState, _dispatcher: &Dispatcher) -> bool {
        let feature = &state.features.ai_assistant;
        match action {
            Action::IncreaseAiAssistantRequestsCount { count } => log::info!(
                "Counting {} AI assistant request(s) at {}/{}",
                count,
                feature.requests_count,
                feature.requests_limit
            ),
            Action::Unknown => log::debug!("Action: unknown type, ignored"),
            _ => log::debug!(
                "Action: {:?} (countdown {}, {})",
                action,
                feature.meta.async_request_countdown,
                feature.meta.async_request_timer_id
            ),
        }

        true // Always pass action through
    }
}
