//! Payload types for exercising storage discipline.

use std::cell::RefCell;
use std::rc::Rc;

use outcome::Contextual;

/// Shared record of which tracked values were dropped, in order.
#[derive(Debug, Clone, Default)]
pub struct DropLog(Rc<RefCell<Vec<&'static str>>>);

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A value that records `name` in this log when dropped.
    pub fn track(&self, name: &'static str) -> Tracked {
        Tracked {
            name,
            log: self.clone(),
        }
    }

    /// How many times `name` has been dropped.
    pub fn count(&self, name: &str) -> usize {
        self.0.borrow().iter().filter(|n| **n == name).count()
    }

    pub fn total(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn order(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

/// Records its own drop in a [`DropLog`]. Clones log under the same name.
#[derive(Debug, Clone)]
pub struct Tracked {
    pub name: &'static str,
    log: DropLog,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.0.borrow_mut().push(self.name);
    }
}

impl Contextual for Tracked {}

/// Movable but not `Clone`.
#[derive(Debug, Default, PartialEq)]
pub struct MoveOnly(pub Vec<u8>);

impl Contextual for MoveOnly {}

/// `Copy` payload: moving it is copying it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CopyOnly(pub u32);

impl Contextual for CopyOnly {}

/// A small context-capable failure type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestError {
    pub code: u32,
    pub trail: Vec<String>,
}

impl TestError {
    pub fn new(code: u32) -> Self {
        Self {
            code,
            trail: Vec::new(),
        }
    }
}

impl Contextual for TestError {
    fn add_context(&mut self, message: &str) {
        self.trail.push(message.to_string());
    }

    fn read_context(&self) -> String {
        self.trail.join(" <- ")
    }
}
