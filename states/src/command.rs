use std::any::Any;

use crate::{Dep, Updater};

/// A manual-only side effect, run via [`crate::StateCtx::dispatch`].
pub trait Command: Any {
    /// Runs the command. Long running work must move `updater` into its
    /// completion callback instead of blocking.
    fn run(&self, deps: Dep<'_>, updater: Updater);

    /// Whether a new dispatch invalidates the previous, still running one.
    ///
    /// When `true`, updates sent by the older run are dropped on sync.
    fn supersedes_previous(&self) -> bool {
        false
    }
}
