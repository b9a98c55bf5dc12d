//! Result capabilities: shared handles to an eventually settled result.
//!
//! A capability starts `Pending` and settles at most once, either
//! `Fulfilled` with a value or `Rejected` with a reason. Resolving with another
//! capability adopts that capability's outcome, immediately if it has already
//! settled, otherwise when it does.
//!
//! There is no job queue here: followers settle synchronously, in the order
//! they started following.

// Rc is the implementation of Capability
#![expect(clippy::disallowed_types, reason = "Rc is the implementation of Capability")]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// Settlement state of a [`Capability`].
#[derive(Clone, Debug, PartialEq)]
pub enum PromiseState {
    /// Not settled yet.
    Pending,
    /// Settled successfully with a value.
    Fulfilled(Value),
    /// Settled with a rejection reason.
    Rejected(Value),
}

impl PromiseState {
    /// Returns `true` for `Fulfilled` and `Rejected`.
    #[inline]
    pub fn is_settled(&self) -> bool {
        !matches!(self, PromiseState::Pending)
    }
}

struct CapabilityInner {
    state: PromiseState,
    /// Set once `resolve` has been called with a still-pending capability.
    locked: bool,
    /// Capabilities that adopted this one while it was pending.
    followers: Vec<Capability>,
}

/// Shared handle to an eventually settled result.
///
/// Cloning shares the handle; the capability lives as long as its longest
/// holder. It never refers back to whatever created it.
#[repr(transparent)]
pub struct Capability(Rc<RefCell<CapabilityInner>>);

impl Capability {
    /// Create a new pending capability.
    pub fn pending() -> Self {
        Capability(Rc::new(RefCell::new(CapabilityInner {
            state: PromiseState::Pending,
            locked: false,
            followers: Vec::new(),
        })))
    }

    /// Create a capability already resolved with `value`.
    pub fn resolved(value: Value) -> Self {
        let capability = Self::pending();
        capability.resolve(value);
        capability
    }

    /// Create a capability already rejected with `reason`.
    pub fn rejected(reason: Value) -> Self {
        let capability = Self::pending();
        capability.reject(reason);
        capability
    }

    /// Resolve with `value`.
    ///
    /// Returns `false` (and changes nothing) if the capability was already
    /// resolved or rejected.
    pub fn resolve(&self, value: Value) -> bool {
        if self.is_resolved() {
            return false;
        }
        match value {
            Value::Capability(other) if other.ptr_eq(self) => {
                self.settle(PromiseState::Rejected(Value::string(
                    "TypeError: chaining cycle detected for capability",
                )));
            }
            Value::Capability(other) => {
                let adopted = other.state();
                if adopted.is_settled() {
                    self.settle(adopted);
                } else {
                    self.0.borrow_mut().locked = true;
                    other.0.borrow_mut().followers.push(self.clone());
                }
            }
            value => self.settle(PromiseState::Fulfilled(value)),
        }
        true
    }

    /// Reject with `reason`.
    ///
    /// Returns `false` (and changes nothing) if the capability was already
    /// resolved or rejected.
    pub fn reject(&self, reason: Value) -> bool {
        if self.is_resolved() {
            return false;
        }
        self.settle(PromiseState::Rejected(reason));
        true
    }

    fn is_resolved(&self) -> bool {
        let inner = self.0.borrow();
        inner.locked || inner.state.is_settled()
    }

    fn settle(&self, state: PromiseState) {
        tracing::trace!(?state, "capability settled");
        let followers = {
            let mut inner = self.0.borrow_mut();
            inner.state = state.clone();
            std::mem::take(&mut inner.followers)
        };
        for follower in followers {
            follower.settle(state.clone());
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PromiseState {
        self.0.borrow().state.clone()
    }

    /// Returns `true` until the capability settles.
    #[inline]
    pub fn is_pending(&self) -> bool {
        !self.0.borrow().state.is_settled()
    }

    /// Whether two handles refer to the same capability.
    #[inline]
    pub fn ptr_eq(&self, other: &Capability) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Clone for Capability {
    #[inline]
    fn clone(&self) -> Self {
        Capability(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capability")
            .field(&self.0.borrow().state)
            .finish()
    }
}
