//! Shared immutable heap storage for values.

// Rc is the implementation of Heap<T>
#![expect(clippy::disallowed_types, reason = "Rc is the implementation of Heap<T>")]

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted immutable heap allocation.
///
/// The constructor is crate-private: heap values are created through the
/// factory methods on [`Value`](crate::Value).
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl Heap<str> {
    #[inline]
    pub(crate) fn new_str(s: &str) -> Self {
        Heap(Rc::from(s))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two heap values share the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests;
