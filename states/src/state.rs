use std::any::Any;

/// Plain data owned by the UI.
///
/// States are registered once with [`crate::StateCtx::add_state`] and mutated in place
/// by widgets through [`crate::StateCtx::state_mut`]. Anything that changes as the
/// result of a side effect belongs in a [`crate::Compute`] instead.
pub trait State: Any {}
