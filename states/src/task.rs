//! Task generations for commands.
//!
//! Every dispatch of a command gets a [`TaskHandle`]. Its [`TaskId`] pairs the
//! command's `TypeId` with a generation counter, and its `CancellationToken`
//! marks the run as stale once a newer dispatch supersedes it.
//!
//! Network callbacks cannot be aborted once started, so cancellation is
//! cooperative: [`crate::StateCtx::sync_computes`] drops updates from cancelled
//! handles instead of applying them.

use std::{any::TypeId, collections::BTreeMap};

use tokio_util::sync::CancellationToken;

/// Identifies one run of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A run of a command together with its cancellation token.
///
/// Clones share the token, so cancelling any clone cancels them all.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// The latest task per command type.
#[derive(Debug, Default)]
pub(crate) struct TaskSlots {
    latest: BTreeMap<TypeId, TaskHandle>,
}

impl TaskSlots {
    /// Starts the next generation for `type_id`.
    ///
    /// With `supersede` the previous handle is cancelled, which turns any of its
    /// in-flight updates into no-ops.
    pub(crate) fn start(&mut self, type_id: TypeId, supersede: bool) -> TaskHandle {
        let generation = match self.latest.get(&type_id) {
            Some(previous) => {
                if supersede && !previous.is_cancelled() {
                    log::debug!(
                        "Superseding task generation {}",
                        previous.id().generation()
                    );
                    previous.cancel();
                }
                previous.id().generation() + 1
            }
            None => 1,
        };

        let handle = TaskHandle::new(TaskId::new(type_id, generation), CancellationToken::new());
        self.latest.insert(type_id, handle.clone());
        handle
    }

    pub(crate) fn latest(&self, type_id: TypeId) -> Option<&TaskHandle> {
        self.latest.get(&type_id)
    }
}
