use thiserror::Error;

/// The container error returned by every fallible registry operation.
///
/// `EntityNotFound` is the specialization raised when an identifier has no
/// registration. Every other variant describes a failure that happened while
/// resolving an entry that *does* exist.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Entity '{0}' Not Found")]
  EntityNotFound(String),

  #[error("Entity '{id}' does not hold a value of type {expected}")]
  TypeMismatch { id: String, expected: &'static str },

  #[error("Failed to resolve entity '{id}': {message}")]
  Resolution { id: String, message: String },

  /// An error raised by a resolver, carried through as-is.
  #[error(transparent)]
  Other(Box<dyn std::error::Error>),
}

impl Error {
  /// Builds a resolution failure for `id`, for use inside resolvers.
  pub fn resolution(id: impl Into<String>, message: impl Into<String>) -> Self {
    Error::Resolution {
      id: id.into(),
      message: message.into(),
    }
  }

  /// Wraps an arbitrary error raised while building a value.
  pub fn other<E>(error: E) -> Self
  where
    E: std::error::Error + 'static,
  {
    Error::Other(Box::new(error))
  }

  /// Returns `true` if this is the "not registered" error.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::EntityNotFound(_))
  }
}

/// A specialized `Result` type for `fibre_registry` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
