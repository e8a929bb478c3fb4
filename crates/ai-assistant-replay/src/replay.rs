//! Replay a list of actions through a fully wired store

use std::io::Read;
use std::path::Path;

use ai_assistant_config::StoreConfig;
use ai_assistant_store::middleware::{LoggingMiddleware, RecordingScheduler, UsageSyncMiddleware};
use ai_assistant_store::{Action, EditorInitialState, PlanState, Store};
use anyhow::{Context, Result};

/// Read the bootstrap state from a JSON file
pub fn read_bootstrap(path: &Path) -> Result<EditorInitialState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bootstrap file {}", path.display()))?;
    EditorInitialState::from_json(&content)
        .with_context(|| format!("Failed to parse bootstrap file {}", path.display()))
}

/// Read the action list from a JSON file, "-" reads stdin
pub fn read_actions(path: &Path) -> Result<Vec<Action>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read actions from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read actions file {}", path.display()))?
    };
    Action::list_from_json(&content)
        .with_context(|| format!("Failed to parse actions from {}", path.display()))
}

/// Dispatch every action in order, calling `on_step` with each resulting state
pub fn replay<F>(
    initial: PlanState,
    actions: Vec<Action>,
    config: &StoreConfig,
    mut on_step: F,
) -> Result<PlanState>
where
    F: FnMut(&Action, &PlanState) -> Result<()>,
{
    let mut store = Store::new(initial);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(UsageSyncMiddleware::new(
        RecordingScheduler::new(),
        config.async_request_timer_interval(),
    )));

    log::info!("Replaying {} actions", actions.len());
    for action in actions {
        store.dispatch(action.clone());
        on_step(&action, store.state())?;
    }

    let feature = &store.state().features.ai_assistant;
    if feature.meta.async_request_timer_id.is_set() {
        log::info!(
            "Feature sync pending as {}",
            feature.meta.async_request_timer_id
        );
    }

    Ok(store.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_assistant_store::domain_models::TimerId;
    use ai_assistant_store::initial_state;

    fn run(bootstrap: &str, actions: &str) -> PlanState {
        let config = StoreConfig::default();
        let bootstrap = EditorInitialState::from_json(bootstrap).unwrap();
        let actions = Action::list_from_json(actions).unwrap();
        replay(
            initial_state(Some(&bootstrap), &config),
            actions,
            &config,
            |_, _| Ok(()),
        )
        .unwrap()
    }

    #[test]
    fn test_replay_over_limit_schedules_sync() {
        let state = run(
            r#"{"ai-assistant": {"requests-count": 18, "requests-limit": 20}}"#,
            r#"[
                {"type": "INCREASE_AI_ASSISTANT_REQUESTS_COUNT", "count": 1},
                {"type": "INCREASE_AI_ASSISTANT_REQUESTS_COUNT", "count": 1},
                {"type": "INCREASE_AI_ASSISTANT_REQUESTS_COUNT", "count": 1}
            ]"#,
        );
        let feature = &state.features.ai_assistant;
        assert_eq!(feature.requests_count, 21);
        assert!(feature.require_upgrade);
        assert_eq!(feature.meta.async_request_countdown, 0);
        assert_eq!(feature.meta.async_request_timer_id, TimerId::from_raw(1));
    }

    #[test]
    fn test_replay_reports_every_step() {
        let config = StoreConfig::default();
        let actions = vec![
            Action::request_ai_assistant_feature(),
            Action::Unknown,
            Action::set_ai_assistant_feature_require_upgrade(true),
        ];
        let mut seen = Vec::new();
        let state = replay(PlanState::default(), actions, &config, |action, state| {
            seen.push((action.clone(), state.features.ai_assistant.has_feature));
            Ok(())
        })
        .unwrap();

        assert_eq!(seen.len(), 3);
        assert_eq!(seen[1].0, Action::Unknown);
        assert!(!state.features.ai_assistant.has_feature);
        assert!(state.features.ai_assistant.is_over_limit);
    }

    #[test]
    fn test_step_error_stops_replay() {
        let config = StoreConfig::default();
        let actions = vec![Action::request_ai_assistant_feature(); 3];
        let mut calls = 0;
        let result = replay(PlanState::default(), actions, &config, |_, _| {
            calls += 1;
            anyhow::bail!("stdout closed")
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_read_missing_actions_file() {
        let err = read_actions(Path::new("/nonexistent/actions.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read actions file"));
    }
}
