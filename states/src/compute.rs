use std::any::Any;

/// A cache that only changes through updates sent by commands.
///
/// Computes never perform IO themselves. A [`crate::Command`] does the work and
/// sends typed updates through its [`crate::Updater`]; those are applied on the
/// UI thread by [`crate::StateCtx::sync_computes`].
pub trait Compute: Any {
    /// Applies one update. Updates of an unexpected type are ignored.
    fn apply_update(&mut self, update: Box<dyn Any + Send>);

    fn as_any(&self) -> &dyn Any;
}

/// Downcasts an update payload, logging when a compute receives something it
/// does not understand.
pub fn downcast_update<U: Any>(update: Box<dyn Any + Send>) -> Option<U> {
    match update.downcast::<U>() {
        Ok(update) => Some(*update),
        Err(_) => {
            log::warn!(
                "Dropping update that is not a {}",
                std::any::type_name::<U>()
            );
            None
        }
    }
}
