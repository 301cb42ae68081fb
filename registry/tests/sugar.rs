mod common;

use common::ServiceC;
use fibre_registry::{registry, Entry, Registry};
use std::rc::Rc;

#[test]
fn test_registry_macro_seeds_plain_values() {
  let registry = registry! {
    "x" => 42_i32,
    "name" => String::from("container"),
  };

  assert!(registry.has("x"));
  assert_eq!(*registry.get::<i32>("x").unwrap(), 42);
  assert_eq!(*registry.get::<String>("name").unwrap(), "container");
  assert_eq!(registry.count(), 2);
}

#[test]
fn test_empty_registry_macro() {
  let registry = registry! {};
  assert!(registry.is_empty());
}

#[test]
fn test_slot_access() {
  let mut registry = Registry::new();

  {
    let mut slot = registry.slot("name");
    assert_eq!(slot.id(), "name");
    assert!(!slot.exists());
    assert!(slot.get::<&str>().unwrap_err().is_not_found());

    slot.set(Entry::value("container"));
    assert!(slot.exists());
    assert_eq!(*slot.get::<&str>().unwrap(), "container");
  }

  assert!(registry.has("name"));

  let mut slot = registry.slot("name");
  assert!(slot.unset());
  assert!(!slot.exists());
  assert!(!slot.unset());
  assert!(!registry.has("name"));
}

#[test]
fn test_slot_set_uses_singleton_mode() {
  let mut registry = Registry::new();
  registry.add_transient("svc", |_| Ok(ServiceC));

  registry.slot("svc").set(Entry::resolver(|_| Ok(ServiceC)));

  assert!(!registry.is_factory("svc"));
  let a = registry.get::<ServiceC>("svc").unwrap();
  let b = registry.get::<ServiceC>("svc").unwrap();
  assert!(Rc::ptr_eq(&a, &b));
}

#[test]
fn test_collect_and_extend() {
  let mut registry: Registry = vec![
    ("a", Entry::value(1_i32)),
    ("b", Entry::resolver(|r: &Registry| Ok(*r.get::<i32>("a")? + 1))),
  ]
  .into_iter()
  .collect();

  registry.extend([(String::from("c"), Entry::value(3_i32))]);

  assert_eq!(registry.count(), 3);
  assert_eq!(*registry.get::<i32>("b").unwrap(), 2);
  assert_eq!(*registry.get::<i32>("c").unwrap(), 3);
}
