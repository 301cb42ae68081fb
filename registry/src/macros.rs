//! Public macros for seeding a registry.

/// Builds a [`Registry`](crate::Registry) from `id => value` pairs.
///
/// Each value is registered as a plain value, as with
/// [`Registry::add_instance`](crate::Registry::add_instance).
///
/// # Examples
///
/// ```
/// use fibre_registry::registry;
///
/// let registry = registry! {
///   "x" => 42_i32,
///   "name" => String::from("fibre"),
/// };
///
/// assert_eq!(registry.count(), 2);
/// assert_eq!(*registry.get::<i32>("x").unwrap(), 42);
/// ```
#[macro_export]
macro_rules! registry {
  () => {
    $crate::Registry::new()
  };

  ($($id:expr => $value:expr),+ $(,)?) => {{
    let mut registry = $crate::Registry::new();
    $(
      registry.add_instance($id, $value);
    )+
    registry
  }};
}
