use fibre_registry::Registry;
use std::cell::Cell;
use std::rc::Rc;

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

fn main() -> fibre_registry::Result<()> {
  let next_id = Rc::new(Cell::new(0_usize));
  let mut registry = Registry::new();

  // --- Singleton Registration ---
  // This resolver will only be called ONCE.
  let ids = Rc::clone(&next_id);
  registry.add_singleton("singleton_tracker", move |_| {
    println!("Creating SINGLETON RequestTracker...");
    let id = ids.get();
    ids.set(id + 1);
    Ok(RequestTracker { id })
  });

  // --- Factory Registration ---
  // This resolver will be called EVERY time the entry is resolved.
  let ids = Rc::clone(&next_id);
  registry.add_transient("factory_tracker", move |_| {
    println!("Creating FACTORY RequestTracker...");
    let id = ids.get();
    ids.set(id + 1);
    Ok(RequestTracker { id })
  });

  println!("--- Resolving Singletons ---");
  let s1 = registry.get::<RequestTracker>("singleton_tracker")?;
  let s2 = registry.get::<RequestTracker>("singleton_tracker")?;
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert!(Rc::ptr_eq(&s1, &s2), "Singleton instances should be identical");

  println!("--- Resolving Factories ---");
  let t1 = registry.get::<RequestTracker>("factory_tracker")?;
  let t2 = registry.get::<RequestTracker>("factory_tracker")?;
  println!("Factory 1 ID: {}, Factory 2 ID: {}", t1.id, t2.id);
  assert!(!Rc::ptr_eq(&t1, &t2), "Factory instances should be different");

  Ok(())
}
