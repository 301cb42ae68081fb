#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

// Installs a fmt subscriber that writes through the test harness, so that
// registry events show up with `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::TRACE)
    .with_test_writer()
    .try_init();
}

// A shared invocation counter that can be moved into resolvers.
#[derive(Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn hit(&self) -> usize {
    let next = self.0.get() + 1;
    self.0.set(next);
    next
  }

  pub fn get(&self) -> usize {
    self.0.get()
  }
}

// --- Fixtures for dependency chains ---

#[derive(Debug)]
pub struct ServiceC;

impl ServiceC {
  pub fn do_something(&self) -> String {
    "C".to_string()
  }
}

#[derive(Debug)]
pub struct ServiceB {
  pub c: Rc<ServiceC>,
}

impl ServiceB {
  pub fn do_something(&self) -> String {
    format!("{}B", self.c.do_something())
  }
}

#[derive(Debug)]
pub struct ServiceA {
  pub b: Rc<ServiceB>,
}

impl ServiceA {
  pub fn do_something(&self) -> String {
    format!("{}A", self.b.do_something())
  }
}
