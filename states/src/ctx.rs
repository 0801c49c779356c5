use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
};

use crate::{
    Command, Compute, Dep, Error, State, StateRuntime, TaskId, Updater, task::TaskSlots,
};

/// Owns every registered state, compute and command of the app.
///
/// Lives on the UI thread. Call [`StateCtx::sync_computes`] once per frame
/// before rendering so updates sent by commands become visible.
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,
    states: BTreeMap<TypeId, Box<dyn Any>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    tasks: TaskSlots,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Registers a compute, replacing any previous value of the same type.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn state_ref<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.downcast_ref::<T>())
    }

    pub fn state_mut<T: State>(&mut self) -> Option<&mut T> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.downcast_mut::<T>())
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// Runs the command `T` now.
    ///
    /// The command sees the current states and computes. Its updates are applied
    /// on the next [`StateCtx::sync_computes`].
    pub fn dispatch<T: Command>(&mut self) -> Result<TaskId, Error> {
        let command = self
            .commands
            .get(&TypeId::of::<T>())
            .ok_or_else(Error::command_not_found::<T>)?;

        let task = self
            .tasks
            .start(TypeId::of::<T>(), command.supersedes_previous());
        let id = task.id();
        log::debug!(
            "Dispatching {} (generation {})",
            std::any::type_name::<T>(),
            id.generation()
        );

        let updater = Updater::new(self.runtime.sender(), task);
        command.run(Dep::new(&self.states, &self.computes), updater);

        Ok(id)
    }

    /// The most recent dispatch of `T`.
    pub fn latest_task<T: Command>(&self) -> Option<TaskId> {
        self.tasks.latest(TypeId::of::<T>()).map(|task| task.id())
    }

    /// Applies every queued update in the order it was sent.
    ///
    /// Updates from superseded tasks are dropped. Returns how many updates were
    /// applied.
    pub fn sync_computes(&mut self) -> usize {
        let mut applied = 0;
        for update in self.runtime.drain() {
            if update.task.is_cancelled() {
                log::warn!(
                    "Dropping stale update from task generation {}",
                    update.task.id().generation()
                );
                continue;
            }

            match self.computes.get_mut(&update.target) {
                Some(compute) => {
                    compute.apply_update(update.payload);
                    applied += 1;
                }
                None => log::error!("No compute registered for update {:?}", update.target),
            }
        }
        applied
    }
}
