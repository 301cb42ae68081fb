//! Entry payloads and the internal provider representation.

use crate::error::Result;
use crate::registry::Registry;
use once_cell::unsync::OnceCell;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A type-erased, shared value handed out by the registry.
pub type Shared = Rc<dyn Any>;

/// A type-erased resolver. It receives the registry that is resolving it so
/// that it can pull its own dependencies by id.
pub type ResolverFn = Box<dyn Fn(&Registry) -> Result<Shared>>;

/// What gets registered under an identifier.
///
/// A `Value` is handed back verbatim on every lookup. A `Resolver` is invoked
/// with the registry to produce the value; whether its result is memoized
/// depends on how it was registered (`set` vs `factory`).
pub enum Entry {
  Value(Shared),
  Resolver(ResolverFn),
}

impl Entry {
  /// Wraps a plain value.
  pub fn value<T: Any>(value: T) -> Self {
    Entry::Value(Rc::new(value))
  }

  /// Registers an already shared value, so callers keep the same instance.
  pub fn shared<T: Any>(value: Rc<T>) -> Self {
    Entry::Value(value)
  }

  /// Wraps a resolver producing a `T`.
  pub fn resolver<T, F>(resolver: F) -> Self
  where
    T: Any,
    F: Fn(&Registry) -> Result<T> + 'static,
  {
    Entry::Resolver(Box::new(move |registry| {
      resolver(registry).map(|value| Rc::new(value) as Shared)
    }))
  }

  pub fn is_resolver(&self) -> bool {
    matches!(self, Entry::Resolver(_))
  }
}

impl fmt::Debug for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Entry::Value(_) => f.write_str("Entry::Value(..)"),
      Entry::Resolver(_) => f.write_str("Entry::Resolver(..)"),
    }
  }
}

/// How a registered entry is stored. The factory flag and the memoized value
/// live inside the variant, so replacing or removing a provider drops all of
/// an entry's state in one step.
pub(crate) enum Provider {
  Instance {
    value: Shared,
  },
  Singleton {
    cell: OnceCell<Shared>,
    resolver: ResolverFn,
  },
  Transient {
    resolver: ResolverFn,
  },
}

impl Provider {
  pub(crate) fn singleton(entry: Entry) -> Self {
    match entry {
      Entry::Value(value) => Provider::Instance { value },
      Entry::Resolver(resolver) => Provider::Singleton {
        cell: OnceCell::new(),
        resolver,
      },
    }
  }

  pub(crate) fn transient(entry: Entry) -> Self {
    match entry {
      Entry::Value(value) => Provider::Instance { value },
      Entry::Resolver(resolver) => Provider::Transient { resolver },
    }
  }

  /// Switches a resolver to factory mode, dropping any memoized value.
  pub(crate) fn into_transient(self) -> Self {
    match self {
      Provider::Singleton { resolver, .. } => Provider::Transient { resolver },
      other => other,
    }
  }

  pub(crate) fn is_factory(&self) -> bool {
    matches!(self, Provider::Transient { .. })
  }

  pub(crate) fn is_cached(&self) -> bool {
    match self {
      Provider::Singleton { cell, .. } => cell.get().is_some(),
      _ => false,
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Provider::Instance { .. } => "value",
      Provider::Singleton { .. } => "singleton",
      Provider::Transient { .. } => "factory",
    }
  }
}
