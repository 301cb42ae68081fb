//! Index-style accessor over a single registry id.

use crate::core::Entry;
use crate::error::Result;
use crate::registry::Registry;
use std::any::Any;
use std::rc::Rc;

/// A handle to one id of a [`Registry`], returned by [`Registry::slot`].
///
/// Every method forwards to the registry method of the same meaning, with the
/// same errors.
pub struct Slot<'a> {
  registry: &'a mut Registry,
  id: String,
}

impl<'a> Slot<'a> {
  pub(crate) fn new(registry: &'a mut Registry, id: String) -> Self {
    Self { registry, id }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  /// See [`Registry::get`].
  pub fn get<T: Any>(&self) -> Result<Rc<T>> {
    self.registry.get(&self.id)
  }

  /// See [`Registry::set`].
  pub fn set(&mut self, entry: Entry) {
    self.registry.set(self.id.clone(), entry);
  }

  /// See [`Registry::has`].
  pub fn exists(&self) -> bool {
    self.registry.has(&self.id)
  }

  /// See [`Registry::delete`].
  pub fn unset(&mut self) -> bool {
    self.registry.delete(&self.id)
  }
}
