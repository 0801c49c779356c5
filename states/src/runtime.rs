use std::any::{Any, TypeId};

use flume::{Receiver, Sender};

use crate::TaskHandle;

/// One pending update for a compute.
#[derive(Debug)]
pub(crate) struct Update {
    pub(crate) target: TypeId,
    pub(crate) task: TaskHandle,
    pub(crate) payload: Box<dyn Any + Send>,
}

/// Channel between commands (possibly running callbacks on other threads) and
/// the UI thread.
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub(crate) fn sender(&self) -> Sender<Update> {
        self.send.clone()
    }

    /// Takes every update queued so far without blocking.
    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }
}
