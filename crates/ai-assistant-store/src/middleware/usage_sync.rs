//! UsageSyncMiddleware - drives the deferred feature sync
//!
//! Every counted request moves the async request countdown one step. Once it
//! runs out, a timer is (re)scheduled; when that timer fires, its owner
//! dispatches the actual feature request. Each further request while the
//! countdown is exhausted replaces the pending timer, so a burst of requests
//! ends in a single sync.
//!
//! The store never waits on timers. Scheduling and cancelling go through the
//! [`TimerScheduler`] seam, only the returned [`TimerId`] is kept in state.

use std::time::Duration;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::domain_models::TimerId;
use crate::middleware::Middleware;
use crate::selectors;
use crate::state::PlanState;

/// Owner of the timers behind the deferred feature sync
pub trait TimerScheduler: Send {
    /// Start a timer firing after `delay`; returns a non-zero id
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, timer_id: TimerId);
}

pub struct UsageSyncMiddleware<S> {
    scheduler: S,
    interval: Duration,
}

impl<S: TimerScheduler> UsageSyncMiddleware<S> {
    pub fn new(scheduler: S, interval: Duration) -> Self {
        Self {
            scheduler,
            interval,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule_sync(&mut self, state: &PlanState, dispatcher: &Dispatcher) {
        let pending = selectors::async_request_timer_id(state);
        if pending.is_set() {
            log::debug!("Cancelling pending feature sync {}", pending);
            self.scheduler.cancel(pending);
        }

        let timer_id = self.scheduler.schedule(self.interval);
        log::debug!(
            "Feature sync scheduled as {} in {}ms",
            timer_id,
            self.interval.as_millis()
        );
        dispatcher.dispatch(Action::enqueue_async_request(timer_id));
    }
}

impl<S: TimerScheduler> Middleware for UsageSyncMiddleware<S> {
    fn handle(&mut self, action: &Action, state: &PlanState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::IncreaseAiAssistantRequestsCount { .. } => {
                if selectors::is_requesting_ai_assistant_feature(state) {
                    // The in-flight request already brings fresh counters
                    log::debug!("Feature request in flight, countdown unchanged");
                } else {
                    dispatcher.dispatch(Action::decrease_new_async_request_countdown());
                }
                true
            }
            Action::DecreaseNewAsyncRequestCountdown => {
                // `state` is still the pre-decrement snapshot
                let remaining = selectors::async_request_countdown(state).saturating_sub(1);
                if remaining <= 0 {
                    dispatcher.dispatch(Action::ScheduleAiAssistantFeatureSync);
                }
                true
            }
            Action::ScheduleAiAssistantFeatureSync => {
                self.schedule_sync(state, dispatcher);
                false
            }
            _ => true,
        }
    }
}

/// In-process scheduler that hands out increasing ids and records calls
///
/// Nothing ever fires; the caller decides when (and whether) to dispatch the
/// feature request for a scheduled id.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    last_id: u64,
    scheduled: Vec<(TimerId, Duration)>,
    cancelled: Vec<TimerId>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self) -> &[(TimerId, Duration)] {
        &self.scheduled
    }

    pub fn cancelled(&self) -> &[TimerId] {
        &self.cancelled
    }

    /// Timers scheduled and not cancelled
    pub fn pending(&self) -> Vec<TimerId> {
        self.scheduled
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| !self.cancelled.contains(id))
            .collect()
    }
}

impl TimerScheduler for RecordingScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.last_id += 1;
        let timer_id = TimerId::from_raw(self.last_id);
        self.scheduled.push((timer_id, delay));
        timer_id
    }

    fn cancel(&mut self, timer_id: TimerId) {
        self.cancelled.push(timer_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn setup() -> (
        UsageSyncMiddleware<RecordingScheduler>,
        Dispatcher,
        Receiver<Action>,
    ) {
        let (tx, rx) = mpsc::channel();
        (
            UsageSyncMiddleware::new(RecordingScheduler::new(), INTERVAL),
            Dispatcher::new(tx),
            rx,
        )
    }

    #[test]
    fn test_increase_queues_countdown_step() {
        let (mut middleware, dispatcher, rx) = setup();
        let should_continue = middleware.handle(
            &Action::increase_ai_assistant_requests_count(1),
            &PlanState::default(),
            &dispatcher,
        );
        assert!(should_continue);
        assert_eq!(rx.try_recv().ok(), Some(Action::decrease_new_async_request_countdown()));
    }

    #[test]
    fn test_increase_while_requesting_skips_countdown() {
        let (mut middleware, dispatcher, rx) = setup();
        let mut state = PlanState::default();
        state.features.ai_assistant.meta.is_requesting = true;

        assert!(middleware.handle(
            &Action::increase_ai_assistant_requests_count(1),
            &state,
            &dispatcher,
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_countdown_running_out_schedules_sync() {
        let (mut middleware, dispatcher, rx) = setup();
        let mut state = PlanState::default();

        state.features.ai_assistant.meta.async_request_countdown = 2;
        assert!(middleware.handle(&Action::DecreaseNewAsyncRequestCountdown, &state, &dispatcher));
        assert!(rx.try_recv().is_err());

        state.features.ai_assistant.meta.async_request_countdown = 1;
        assert!(middleware.handle(&Action::DecreaseNewAsyncRequestCountdown, &state, &dispatcher));
        assert_eq!(rx.try_recv().ok(), Some(Action::ScheduleAiAssistantFeatureSync));
    }

    #[test]
    fn test_schedule_is_consumed_and_records_timer() {
        let (mut middleware, dispatcher, rx) = setup();

        let should_continue = middleware.handle(
            &Action::ScheduleAiAssistantFeatureSync,
            &PlanState::default(),
            &dispatcher,
        );

        assert!(!should_continue);
        let timer_id = TimerId::from_raw(1);
        assert_eq!(rx.try_recv().ok(), Some(Action::enqueue_async_request(timer_id)));
        assert_eq!(middleware.scheduler().scheduled(), &[(timer_id, INTERVAL)]);
        assert!(middleware.scheduler().cancelled().is_empty());
    }

    #[test]
    fn test_schedule_replaces_pending_timer() {
        let (mut middleware, dispatcher, rx) = setup();
        let mut state = PlanState::default();
        state.features.ai_assistant.meta.async_request_timer_id = TimerId::from_raw(7);

        middleware.handle(&Action::ScheduleAiAssistantFeatureSync, &state, &dispatcher);

        assert_eq!(middleware.scheduler().cancelled(), &[TimerId::from_raw(7)]);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::enqueue_async_request(TimerId::from_raw(1)))
        );
    }

    #[test]
    fn test_recording_scheduler_pending() {
        let mut scheduler = RecordingScheduler::new();
        let first = scheduler.schedule(INTERVAL);
        let second = scheduler.schedule(INTERVAL);
        scheduler.cancel(first);
        assert_eq!(scheduler.pending(), vec![second]);
        assert!(first.is_set());
    }
}
