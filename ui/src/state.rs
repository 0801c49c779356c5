use std::sync::Arc;

use roster_business::{BusinessConfig, FetchService, FetchState};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            log::error!("{err}, falling back to the default users endpoint");
            BusinessConfig::default()
        });
        log::info!("Users endpoint: {}", config.users_url());

        Self::with_config(config, FetchState::default())
    }
}

impl State {
    fn with_config(config: BusinessConfig, fetch: FetchState) -> Self {
        let mut ctx = StateCtx::new();
        roster_business::register(&mut ctx, config, fetch);
        Self { ctx }
    }

    /// Real HTTP against `<base_url>/users`, e.g. a mock server.
    pub fn test(base_url: &str) -> Self {
        Self::with_config(BusinessConfig::new(base_url), FetchState::default())
    }

    /// Injected fetcher against `<base_url>/users`.
    pub fn with_fetcher(base_url: &str, fetcher: Arc<dyn FetchService>) -> Self {
        Self::with_config(BusinessConfig::new(base_url), FetchState::new(fetcher))
    }
}
