use egui::{Response, Ui};

use crate::{state::State, widgets};

/// The counter, the users table and the footer.
pub fn home_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Roster");
        ui.add_space(8.0);

        widgets::counter(&mut state.ctx, ui);

        ui.add_space(24.0);
        ui.heading("Users");
        ui.add_space(8.0);
        widgets::user_list(&mut state.ctx, ui);

        ui.add_space(16.0);
        widgets::powered_by_egui_and_eframe(ui);
    })
    .response
}

#[cfg(test)]
mod home_page_test {
    use kittest::Queryable;

    use crate::test_utils::TestCtx;

    #[test]
    fn shows_both_widgets() {
        let ctx = TestCtx::with_mock(Err("unused".to_owned()), |ui, state| {
            super::home_page(state, ui);
        });

        let harness = ctx.harness();
        assert!(harness.query_by_label("count is 0").is_some());
        assert!(harness.query_by_label("Load users").is_some());
        assert!(harness.query_by_label_contains("Powered by").is_some());
    }
}
