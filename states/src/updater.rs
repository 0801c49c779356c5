use std::any::{Any, TypeId};

use flume::Sender;

use crate::{Compute, TaskHandle, TaskId, runtime::Update};

/// Sends updates for computes back to the UI thread.
///
/// An `Updater` is bound to the task that created it. It is `Send`, so it can
/// be moved into network callbacks.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
    task: TaskHandle,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>, task: TaskHandle) -> Self {
        Self { send, task }
    }

    /// Queues `payload` for the compute `T`.
    pub fn update<T: Compute>(&self, payload: impl Any + Send) {
        let update = Update {
            target: TypeId::of::<T>(),
            task: self.task.clone(),
            payload: Box::new(payload),
        };
        if self.send.send(update).is_err() {
            log::warn!(
                "State context is gone, dropping update for {}",
                std::any::type_name::<T>()
            );
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task.id()
    }

    /// True once a newer dispatch superseded this task.
    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }
}
