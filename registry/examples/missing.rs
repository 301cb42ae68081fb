use fibre_registry::{Error, Registry};

struct UnregisteredService;

fn main() {
  let registry = Registry::new();

  println!("Attempting to resolve an entry that was never registered...");
  match registry.get::<UnregisteredService>("unregistered") {
    Ok(_) => panic!("Should not have found the entry!"),
    Err(Error::EntityNotFound(id)) => println!("Correctly received EntityNotFound for '{}'.", id),
    Err(other) => panic!("Unexpected error: {}", other),
  }

  println!("\nNow, resolving it as an optional dependency...");
  match registry.try_get::<UnregisteredService>("unregistered") {
    Ok(None) => println!("Correctly received `None` for the missing entry."),
    _ => panic!("Expected `Ok(None)`"),
  }
}
