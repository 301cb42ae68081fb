//! # Fibre Registry
//!
//! A small, single-threaded dependency-injection registry for Rust.
//!
//! Entries are registered under string ids and resolved on demand. An entry is
//! either a plain value, handed back as-is, or a resolver: a closure that gets
//! the registry itself and builds the value, looking up its own dependencies
//! by id along the way.
//!
//! ## Core Concepts
//!
//! - **Registry**: The map of ids to entries. Each registry is an independent
//!   value; there is no global instance.
//! - **Singleton mode**: The default. A resolver registered with `set` runs
//!   once and its result is reused.
//! - **Factory mode**: A resolver registered with `factory` runs on every `get`.
//! - **Errors**: `get` fails with `Error::EntityNotFound` for unknown ids and
//!   passes resolver errors through untouched.
//!
//! Cycles between resolvers are not detected and recurse until the stack runs
//! out.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_registry::{Entry, Registry};
//! use std::rc::Rc;
//!
//! struct Database {
//!   url: String,
//! }
//!
//! struct UserService {
//!   db: Rc<Database>,
//! }
//!
//! let mut registry = Registry::new();
//! registry.add_instance("db_url", String::from("postgres://localhost/app"));
//! registry.add_singleton("db", |r| {
//!   Ok(Database {
//!     url: (*r.get::<String>("db_url")?).clone(),
//!   })
//! });
//! registry.add_transient("users", |r| Ok(UserService { db: r.get("db")? }));
//!
//! let a = registry.get::<UserService>("users").unwrap();
//! let b = registry.get::<UserService>("users").unwrap();
//!
//! assert!(!Rc::ptr_eq(&a, &b));
//! assert!(Rc::ptr_eq(&a.db, &b.db));
//! assert_eq!(a.db.url, "postgres://localhost/app");
//! ```

mod builder;
mod core;
mod error;
#[cfg(feature = "macros")]
mod macros;
mod registry;
mod slot;

pub use crate::builder::RegistryBuilder;
pub use crate::core::{Entry, ResolverFn, Shared};
pub use crate::error::{Error, Result};
pub use crate::registry::Registry;
pub use crate::slot::Slot;
