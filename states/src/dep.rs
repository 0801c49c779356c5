use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
};

use crate::{Compute, Error, State};

/// Read-only view of the registered states and computes, handed to commands.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn Any>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn Any>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn get_state_ref<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn get_compute_ref<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .ok_or_else(Error::compute_not_found::<T>)
    }
}
