use std::sync::Arc;

use roster_states::State;

use crate::{EhttpFetcher, FetchService};

/// The injected HTTP capability.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(fetcher: Arc<dyn FetchService>) -> Self {
        Self { inner: fetcher }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(Arc::new(EhttpFetcher))
    }
}

impl State for FetchState {}
