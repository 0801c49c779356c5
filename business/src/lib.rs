//! Domain logic for the roster UI: the click counter, the users list state
//! machine and the collaborators it talks to.

mod config;
mod counter;
mod error;
mod fetch_service;
mod fetch_state;
mod sort;
mod user;
mod user_list;


pub use config::{BusinessConfig, DEFAULT_USERS_URL};
pub use counter::Counter;
pub use error::{ConfigError, FetchError};
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::{DeferredFetcher, MockFetcher, mock_response};
pub use fetch_state::FetchState;
pub use sort::{SortMode, compare_names, sorted_view};
pub use user::User;
pub use user_list::{
    FetchUsersCommand, ToggleSortCommand, UserListCompute, UserListUpdate, ViewState,
    interpret_response,
};

use roster_states::StateCtx;

/// Registers every state, compute and command the page needs.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig, fetch: FetchState) {
    ctx.add_state(config);
    ctx.add_state(fetch);
    ctx.add_state(Counter::default());
    ctx.record_compute(UserListCompute::default());
    ctx.record_command(FetchUsersCommand);
    ctx.record_command(ToggleSortCommand);
}
