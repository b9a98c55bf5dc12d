//! Binding cells: the mutable storage behind one module export.

// Rc is the intentional implementation detail of Cell
#![expect(clippy::disallowed_types, reason = "Rc is the implementation of Cell")]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// A single mutable storage location for one exported binding.
///
/// Cloning a `Cell` clones the handle, not the slot: every clone reads and
/// writes the same value. Identity is observable through [`Cell::ptr_eq`],
/// which is how callers check that two resolutions of one export agree.
///
/// # Thread Safety
/// `Cell` is NOT thread-safe. It uses `Rc` internally; module bindings live
/// on the single evaluation thread.
#[repr(transparent)]
pub struct Cell(Rc<RefCell<Value>>);

impl Cell {
    /// Allocate a new cell holding `undefined`.
    #[inline]
    pub fn new() -> Self {
        Self::with_value(Value::Undefined)
    }

    /// Allocate a new cell holding `value`.
    #[inline]
    pub fn with_value(value: Value) -> Self {
        Cell(Rc::new(RefCell::new(value)))
    }

    /// Read the current value.
    #[inline]
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Overwrite the current value, returning the old one.
    #[inline]
    pub fn set(&self, value: Value) -> Value {
        self.0.replace(value)
    }

    /// Whether two handles refer to the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Cell) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Cell {
    #[inline]
    fn clone(&self) -> Self {
        Cell(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&*self.0.borrow()).finish()
    }
}
