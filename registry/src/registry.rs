//! The `Registry` struct and its associated methods.

use crate::builder::RegistryBuilder;
use crate::core::{Entry, Provider, ResolverFn, Shared};
use crate::error::{Error, Result};
use crate::slot::Slot;
use std::any::{type_name, Any};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// A single-threaded, string-keyed dependency-injection registry.
///
/// Entries are either plain values, returned as-is, or resolvers that are
/// called with the registry itself to build their value. Resolvers registered
/// with [`set`](Registry::set) run once and their result is memoized;
/// resolvers registered with [`factory`](Registry::factory) run on every
/// lookup.
///
/// Values are shared through `Rc`, so the registry is not `Send`. Registration
/// takes `&mut self`; resolution only needs `&self`, which lets a resolver look
/// up its own dependencies while it is being resolved.
///
/// # Examples
///
/// ```
/// use fibre_registry::{Entry, Registry};
///
/// let mut registry = Registry::new();
/// registry.set("name", Entry::value(String::from("world")));
/// registry.set(
///   "greeting",
///   Entry::resolver(|r: &Registry| Ok(format!("hello {}", r.get::<String>("name")?))),
/// );
///
/// assert_eq!(*registry.get::<String>("greeting").unwrap(), "hello world");
/// ```
#[derive(Default)]
pub struct Registry {
  providers: HashMap<String, Provider>,
}

impl Registry {
  /// Creates a new, empty `Registry`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a builder for seeding a registry up front.
  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::new()
  }

  /// Creates a registry seeded with `entries`, each registered via `set`.
  pub fn with_entries<I, K>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, Entry)>,
    K: Into<String>,
  {
    entries.into_iter().collect()
  }

  /// Creates a registry seeded with `entries`, switching every id listed in
  /// `factories` to factory mode. Ids in `factories` that are not part of
  /// `entries`, or that hold plain values, are ignored.
  pub fn with_entries_and_factories<I, K, F, S>(entries: I, factories: F) -> Self
  where
    I: IntoIterator<Item = (K, Entry)>,
    K: Into<String>,
    F: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let factories: HashSet<String> = factories
      .into_iter()
      .map(|id| id.as_ref().to_owned())
      .collect();
    let mut registry = Self::new();
    for (id, entry) in entries {
      let id = id.into();
      if entry.is_resolver() && factories.contains(&id) {
        registry.factory(id, entry);
      } else {
        registry.set(id, entry);
      }
    }
    registry
  }

  // --- PRIVATE HELPERS ---

  fn insert(&mut self, id: String, provider: Provider) {
    trace!(
      id = %id,
      kind = provider.kind(),
      replacing = self.providers.contains_key(&id),
      "registering entry"
    );
    self.providers.insert(id, provider);
  }

  fn invoke(&self, id: &str, resolver: &ResolverFn) -> Result<Shared> {
    debug!(id, "invoking resolver");
    match resolver(self) {
      Ok(value) => Ok(value),
      Err(error) => {
        warn!(id, %error, "resolver failed");
        Err(error)
      }
    }
  }

  // --- Registration ---

  /// Registers `entry` under `id` in singleton mode.
  ///
  /// Any previous registration under `id` is replaced wholesale, including
  /// its factory flag and memoized value.
  pub fn set(&mut self, id: impl Into<String>, entry: Entry) {
    self.insert(id.into(), Provider::singleton(entry));
  }

  /// Registers `entry` under `id` in factory mode: a resolver is invoked on
  /// every [`get`](Registry::get) and its result is never cached.
  pub fn factory(&mut self, id: impl Into<String>, entry: Entry) {
    self.insert(id.into(), Provider::transient(entry));
  }

  pub fn add_instance<T: Any>(&mut self, id: impl Into<String>, value: T) {
    self.set(id, Entry::value(value));
  }

  pub fn add_singleton<T, F>(&mut self, id: impl Into<String>, resolver: F)
  where
    T: Any,
    F: Fn(&Registry) -> Result<T> + 'static,
  {
    self.set(id, Entry::resolver(resolver));
  }

  pub fn add_transient<T, F>(&mut self, id: impl Into<String>, resolver: F)
  where
    T: Any,
    F: Fn(&Registry) -> Result<T> + 'static,
  {
    self.factory(id, Entry::resolver(resolver));
  }

  /// Removes the entry under `id` together with its mode and cached value.
  ///
  /// Returns whether anything was removed; removing an unknown id is a no-op.
  pub fn delete(&mut self, id: &str) -> bool {
    let removed = self.providers.remove(id).is_some();
    if removed {
      trace!(id, "deleted entry");
    }
    removed
  }

  // --- Resolution ---

  /// Resolves `id` without downcasting.
  pub fn resolve(&self, id: &str) -> Result<Shared> {
    let provider = self
      .providers
      .get(id)
      .ok_or_else(|| Error::EntityNotFound(id.to_owned()))?;

    match provider {
      Provider::Instance { value } => Ok(Rc::clone(value)),
      Provider::Singleton { cell, resolver } => {
        if let Some(value) = cell.get() {
          trace!(id, "singleton cache hit");
          return Ok(Rc::clone(value));
        }
        // The cell is only written once the resolver has succeeded. A resolver
        // may reach its own id and finish first; that value then wins.
        let value = self.invoke(id, resolver)?;
        match cell.get() {
          Some(cached) => Ok(Rc::clone(cached)),
          None => {
            let _ = cell.set(Rc::clone(&value));
            Ok(value)
          }
        }
      }
      Provider::Transient { resolver } => self.invoke(id, resolver),
    }
  }

  /// Resolves `id` as a `T`.
  ///
  /// # Errors
  ///
  /// - [`Error::EntityNotFound`] if nothing is registered under `id`.
  /// - [`Error::TypeMismatch`] if the value is not a `T`.
  /// - Whatever the entry's resolver returned, unchanged.
  pub fn get<T: Any>(&self, id: &str) -> Result<Rc<T>> {
    self
      .resolve(id)?
      .downcast::<T>()
      .map_err(|_| Error::TypeMismatch {
        id: id.to_owned(),
        expected: type_name::<T>(),
      })
  }

  /// Like [`get`](Registry::get), but maps a missing entry to `None`.
  /// Resolution failures of an existing entry are still returned.
  pub fn try_get<T: Any>(&self, id: &str) -> Result<Option<Rc<T>>> {
    match self.get(id) {
      Ok(value) => Ok(Some(value)),
      Err(Error::EntityNotFound(_)) => Ok(None),
      Err(error) => Err(error),
    }
  }

  // --- Introspection ---

  /// Returns whether `id` is registered, regardless of mode or cache state.
  pub fn has(&self, id: &str) -> bool {
    self.providers.contains_key(id)
  }

  /// Number of registered identifiers. Memoized values are not counted.
  pub fn count(&self) -> usize {
    self.providers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.providers.is_empty()
  }

  /// Iterates over the registered identifiers in no particular order.
  pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
    self.providers.keys().map(String::as_str)
  }

  /// Whether `id` holds a resolver registered in factory mode.
  pub fn is_factory(&self, id: &str) -> bool {
    self.providers.get(id).is_some_and(Provider::is_factory)
  }

  /// Whether `id` holds a singleton resolver that has already been resolved.
  pub fn is_cached(&self, id: &str) -> bool {
    self.providers.get(id).is_some_and(Provider::is_cached)
  }

  /// Index-style access to a single id.
  pub fn slot(&mut self, id: impl Into<String>) -> Slot<'_> {
    Slot::new(self, id.into())
  }

  pub(crate) fn mark_factory(&mut self, id: &str) {
    if let Some(provider) = self.providers.remove(id) {
      self.providers.insert(id.to_owned(), provider.into_transient());
    }
  }
}

impl<K: Into<String>> FromIterator<(K, Entry)> for Registry {
  fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
    let mut registry = Registry::new();
    registry.extend(iter);
    registry
  }
}

impl<K: Into<String>> Extend<(K, Entry)> for Registry {
  fn extend<I: IntoIterator<Item = (K, Entry)>>(&mut self, iter: I) {
    for (id, entry) in iter {
      self.set(id, entry);
    }
  }
}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut ids: Vec<_> = self.providers.iter().collect();
    ids.sort_by(|(a, _), (b, _)| a.cmp(b));
    f.debug_map()
      .entries(ids.into_iter().map(|(id, provider)| (id, provider.kind())))
      .finish()
  }
}
