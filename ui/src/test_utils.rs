//! Harness helpers for widget tests.

use std::sync::Arc;

use egui_kittest::Harness;
use roster_business::{FetchService, MockFetcher, mock_response};
use serde_json::json;

use crate::state::State;

const BASE_URL: &str = "http://mock.test";

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    pub fn with_fetcher(
        fetcher: Arc<dyn FetchService>,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let state = State::with_fetcher(BASE_URL, fetcher);
        Self {
            harness: Harness::new_ui_state(app, state),
        }
    }

    /// Every request answers immediately with `response`.
    pub fn with_mock(
        response: ehttp::Result<ehttp::Response>,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        Self::with_fetcher(Arc::new(MockFetcher::new(response)), app)
    }

    /// Just the users list widget, syncing computes every frame like the app.
    pub fn user_list(response: ehttp::Result<ehttp::Response>) -> Self {
        Self::with_mock(response, |ui, state| {
            state.ctx.sync_computes();
            crate::widgets::user_list(&mut state.ctx, ui);
        })
    }

    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }
}

/// Runs enough frames for a click to be handled and its result rendered.
pub fn settle(harness: &mut Harness<'_, State>) {
    for _ in 0..3 {
        harness.step();
    }
}

pub fn ok_users(names: &[&str]) -> ehttp::Result<ehttp::Response> {
    let users: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "id": i + 1,
                "name": name,
                "email": format!("user{}@example.com", i + 1),
                "phone": "+7 (999) 123-45-67",
                "website": "example.com",
            })
        })
        .collect();
    let body = serde_json::to_vec(&users).unwrap_or_default();
    Ok(mock_response(&format!("{BASE_URL}/users"), 200, body))
}

pub fn not_found() -> ehttp::Result<ehttp::Response> {
    Ok(mock_response(
        &format!("{BASE_URL}/users"),
        404,
        br#"{"message":"Not found"}"#.to_vec(),
    ))
}
