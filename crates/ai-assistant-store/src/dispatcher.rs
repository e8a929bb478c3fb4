//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to follow up on an action, it uses the Dispatcher.
//! Actions dispatched here are queued and processed by the store after the
//! current action, going through the full middleware chain again.
//!
//! This enables patterns like:
//! - IncreaseAiAssistantRequestsCount triggers DecreaseNewAsyncRequestCountdown
//! - an exhausted countdown triggers ScheduleAiAssistantFeatureSync

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
///
/// Clones share the same queue, so an external timer owner can hold one and
/// dispatch the feature request when its timer fires.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// Returns false once the store is gone, so a timer owner holding a
    /// clone can stop rescheduling.
    pub fn dispatch(&self, action: Action) -> bool {
        match self.action_tx.send(action) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Dispatcher: store dropped, {:?} discarded", e.0);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_clones_share_one_queue() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let timer_owner = dispatcher.clone();

        assert!(dispatcher.dispatch(Action::decrease_new_async_request_countdown()));
        assert!(timer_owner.dispatch(Action::request_ai_assistant_feature()));

        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![
                Action::decrease_new_async_request_countdown(),
                Action::request_ai_assistant_feature(),
            ]
        );
    }

    #[test]
    fn test_dispatch_after_store_dropped() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        assert!(!dispatcher.dispatch(Action::request_ai_assistant_feature()));
    }
}
