//! Up-front construction of a seeded `Registry`.

use crate::core::Entry;
use crate::error::Result;
use crate::registry::Registry;
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// A builder for creating a [`Registry`] with its initial registrations.
///
/// Registrations are applied in the order they were added, so a later
/// registration under the same id wins. Ids passed to
/// [`factories`](RegistryBuilder::factories) are switched to factory mode
/// after all registrations are applied.
#[derive(Default)]
pub struct RegistryBuilder {
  entries: Vec<(String, Entry, bool)>,
  factories: HashSet<String>,
}

impl fmt::Debug for RegistryBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RegistryBuilder")
      .field("entries", &self.entries.len())
      .field("factories", &self.factories)
      .finish()
  }
}

impl RegistryBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `entry` in singleton mode.
  pub fn entry(mut self, id: impl Into<String>, entry: Entry) -> Self {
    self.entries.push((id.into(), entry, false));
    self
  }

  /// Registers `entry` in factory mode.
  pub fn factory_entry(mut self, id: impl Into<String>, entry: Entry) -> Self {
    self.entries.push((id.into(), entry, true));
    self
  }

  pub fn instance<T: Any>(self, id: impl Into<String>, value: T) -> Self {
    self.entry(id, Entry::value(value))
  }

  pub fn shared<T: Any>(self, id: impl Into<String>, value: Rc<T>) -> Self {
    self.entry(id, Entry::shared(value))
  }

  pub fn singleton<T, F>(self, id: impl Into<String>, resolver: F) -> Self
  where
    T: Any,
    F: Fn(&Registry) -> Result<T> + 'static,
  {
    self.entry(id, Entry::resolver(resolver))
  }

  pub fn transient<T, F>(self, id: impl Into<String>, resolver: F) -> Self
  where
    T: Any,
    F: Fn(&Registry) -> Result<T> + 'static,
  {
    self.factory_entry(id, Entry::resolver(resolver))
  }

  /// Flags the given ids as factory-mode.
  pub fn factories<I, S>(mut self, ids: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.factories.extend(ids.into_iter().map(Into::into));
    self
  }

  pub fn build(self) -> Registry {
    let mut registry = Registry::new();
    for (id, entry, factory) in self.entries {
      if factory {
        registry.factory(id, entry);
      } else {
        registry.set(id, entry);
      }
    }
    for id in &self.factories {
      registry.mark_factory(id);
    }
    registry
  }
}
