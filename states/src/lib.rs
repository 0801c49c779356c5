//! State runtime for the roster UI.
//!
//! Widgets read [`State`]s and [`Compute`]s from a [`StateCtx`]. Side effects run
//! as [`Command`]s, which report back through an [`Updater`]; the context
//! applies those updates on the UI thread in [`StateCtx::sync_computes`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod runtime;
mod state;
mod task;
mod updater;

pub use command::Command;
pub use compute::{Compute, downcast_update};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use runtime::StateRuntime;
pub use state::State;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;
