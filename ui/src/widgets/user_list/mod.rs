//! Users list widget.
//!
//! Renders the load button, the error message and the users table from the
//! `UserListCompute` cache. Clicks are turned into commands; their results show
//! up after the next `StateCtx::sync_computes`.

mod table;

use std::time::Duration;

use egui::{Button, Response, Ui};
use roster_business::{FetchUsersCommand, ToggleSortCommand, UserListCompute};
use roster_states::StateCtx;

use crate::utils::colors::COLOR_RED;

pub use table::name_header_label;

pub const LOAD_LABEL: &str = "Load users";
pub const LOADING_LABEL: &str = "Loading...";

/// How often to repaint while waiting for the network.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

enum UserListAction {
    Fetch,
    ToggleSort,
}

/// Renders the users list and dispatches the command for any click.
pub fn user_list(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let Some(list) = state_ctx.cached::<UserListCompute>() else {
        log::error!("UserListCompute is not registered");
        return ui.label("");
    };

    let mut action = None;
    let response = ui
        .vertical(|ui| {
            let loading = list.is_loading();
            let label = if loading { LOADING_LABEL } else { LOAD_LABEL };
            if ui.add_enabled(!loading, Button::new(label)).clicked() {
                action = Some(UserListAction::Fetch);
            }
            if loading {
                ui.ctx().request_repaint_after(LOADING_REPAINT_INTERVAL);
            }

            if let Some(message) = list.error_message() {
                ui.add_space(8.0);
                ui.colored_label(COLOR_RED, message);
            }

            if let (Some(rows), Some(sort)) = (list.rows(), list.sort_mode()) {
                ui.add_space(12.0);
                if table::users_table(ui, &rows, sort) {
                    action = Some(UserListAction::ToggleSort);
                }
            }
        })
        .response;

    let dispatched = match action {
        Some(UserListAction::Fetch) => state_ctx.dispatch::<FetchUsersCommand>(),
        Some(UserListAction::ToggleSort) => state_ctx.dispatch::<ToggleSortCommand>(),
        None => return response,
    };
    if let Err(err) = dispatched {
        log::error!("Failed to dispatch users command: {err}");
    }
    ui.ctx().request_repaint();

    response
}
