use egui::{Response, Ui};
use roster_business::Counter;
use roster_states::StateCtx;

/// Button that shows and increments the click counter.
pub fn counter(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let Some(counter) = state_ctx.state_mut::<Counter>() else {
        log::error!("Counter state is not registered");
        return ui.label("");
    };

    let response = ui.button(counter.label());
    if response.clicked() {
        counter.increment();
        log::debug!("Counter clicked: {}", counter.count());
    }
    response
}
