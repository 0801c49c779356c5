//! Users list: view state, reducer and the commands that drive it.
//!
//! `UserListCompute` is only ever changed through [`UserListUpdate`]s:
//! - [`FetchUsersCommand`] sends `Started`, performs the request through the
//!   injected [`crate::FetchService`], then sends `Finished`.
//! - [`ToggleSortCommand`] sends `ToggleSort`.
//!
//! Dispatching `FetchUsersCommand` again supersedes the previous run, so a late
//! response to an older request is dropped instead of overwriting newer state.

use std::any::Any;

use log::{debug, error, info, warn};
use roster_states::{Command, Compute, Dep, Updater, downcast_update};

use crate::{BusinessConfig, FetchError, FetchState, SortMode, User, sorted_view};

/// What the users view currently shows. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight; neither a table nor an error is shown.
    Loading,
    /// Users in fetch order plus the sort applied for display.
    Loaded { users: Vec<User>, sort: SortMode },
    /// The last request failed with this message.
    Error(String),
}

/// Messages that move [`UserListCompute`] between states.
#[derive(Debug, Clone)]
pub enum UserListUpdate {
    Started,
    Finished(Result<Vec<User>, FetchError>),
    ToggleSort,
}

#[derive(Debug, Default)]
pub struct UserListCompute {
    view: ViewState,
}

impl UserListCompute {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.view, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The active sort, if users are loaded.
    pub fn sort_mode(&self) -> Option<SortMode> {
        match &self.view {
            ViewState::Loaded { sort, .. } => Some(*sort),
            _ => None,
        }
    }

    /// Users in fetch order, if loaded.
    pub fn users(&self) -> Option<&[User]> {
        match &self.view {
            ViewState::Loaded { users, .. } => Some(users),
            _ => None,
        }
    }

    /// Users in display order, if loaded.
    pub fn rows(&self) -> Option<Vec<&User>> {
        match &self.view {
            ViewState::Loaded { users, sort } => Some(sorted_view(users, *sort)),
            _ => None,
        }
    }

    /// Applies one transition.
    pub fn apply(&mut self, update: UserListUpdate) {
        match update {
            UserListUpdate::Started => {
                self.view = ViewState::Loading;
            }
            UserListUpdate::Finished(result) => {
                if !self.is_loading() {
                    warn!("Ignoring users fetch result while not loading");
                    return;
                }
                self.view = match result {
                    Ok(users) => ViewState::Loaded {
                        users,
                        sort: SortMode::Unsorted,
                    },
                    Err(err) => ViewState::Error(err.to_string()),
                };
            }
            UserListUpdate::ToggleSort => match &mut self.view {
                ViewState::Loaded { sort, .. } => {
                    *sort = sort.next();
                    debug!("Users sorted by name: {sort:?}");
                }
                _ => debug!("Ignoring sort toggle without loaded users"),
            },
        }
    }
}

impl Compute for UserListCompute {
    fn apply_update(&mut self, update: Box<dyn Any + Send>) {
        if let Some(update) = downcast_update::<UserListUpdate>(update) {
            self.apply(update);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Turns a finished `ehttp` round trip into the users list or a [`FetchError`].
pub fn interpret_response(result: ehttp::Result<ehttp::Response>) -> Result<Vec<User>, FetchError> {
    let response = result.map_err(FetchError::Transport)?;
    if !response.ok {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_slice::<Vec<User>>(&response.bytes)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches the users list. Dispatch on user action only.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let (config, fetch) = match (
            deps.get_state_ref::<BusinessConfig>(),
            deps.get_state_ref::<FetchState>(),
        ) {
            (Ok(config), Ok(fetch)) => (config, fetch),
            (Err(err), _) | (_, Err(err)) => {
                error!("FetchUsersCommand: {err}");
                return;
            }
        };

        let url = config.users_url();
        info!(
            "FetchUsersCommand: Fetching users from {url} (generation {})",
            updater.task_id().generation()
        );
        updater.update::<UserListCompute>(UserListUpdate::Started);

        let request = ehttp::Request::get(url.as_str());
        fetch.inner.fetch(
            request,
            Box::new(move |result| {
                if updater.is_cancelled() {
                    warn!(
                        "FetchUsersCommand: Response for superseded generation {} ignored",
                        updater.task_id().generation()
                    );
                    return;
                }

                let outcome = interpret_response(result);
                match &outcome {
                    Ok(users) => info!("FetchUsersCommand: Fetched {} users", users.len()),
                    Err(err) => error!("FetchUsersCommand: {err}"),
                }
                updater.update::<UserListCompute>(UserListUpdate::Finished(outcome));
            }),
        );
    }

    fn supersedes_previous(&self) -> bool {
        true
    }
}

/// Advances the name sort of the loaded users.
#[derive(Debug, Default)]
pub struct ToggleSortCommand;

impl Command for ToggleSortCommand {
    fn run(&self, _deps: Dep<'_>, updater: Updater) {
        updater.update::<UserListCompute>(UserListUpdate::ToggleSort);
    }
}
