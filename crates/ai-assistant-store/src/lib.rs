//! Redux-style store for the AI assistant plan and usage state
//!
//! The state is seeded once from the server-rendered [`bootstrap`] state and
//! from then on only changes through [`Action`]s reduced by the pure
//! [`reducer::reduce`]. The [`Store`] adds a middleware chain around it; the
//! [`middleware::UsageSyncMiddleware`] uses it to schedule the deferred
//! feature sync as requests are counted.
//!
//! ```
//! use ai_assistant_store::{initial_state, Action, Store};
//! use ai_assistant_config::StoreConfig;
//!
//! let mut store = Store::new(initial_state(None, &StoreConfig::default()));
//! store.dispatch(Action::increase_ai_assistant_requests_count(20));
//! assert!(store.state().features.ai_assistant.require_upgrade);
//! ```

pub mod actions;
pub mod bootstrap;
pub mod constants;
pub mod dispatcher;
pub mod domain_models;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;

pub use actions::Action;
pub use bootstrap::{initial_state, EditorInitialState};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use state::{AiAssistantFeature, FeatureMeta, FeaturesState, PlanState};
pub use store::Store;
