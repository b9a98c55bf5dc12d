//! Execution context handed to host evaluation steps.

use kiln_ir::SharedInterner;
use kiln_value::Value;

/// Per-runtime state the host can reach while evaluating a module.
///
/// Besides the interner, it holds the "currently pending exception": host
/// code deep inside an evaluation can [`throw`](Self::throw), and once the
/// steps return, whether `Ok` or `Err`, the engine promotes the pending
/// exception to be the module's recorded error.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    interner: SharedInterner,
    pending_exception: Option<Value>,
}

impl ExecutionContext {
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            pending_exception: None,
        }
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Schedule `exception`, replacing any exception already pending.
    pub fn throw(&mut self, exception: Value) {
        if let Some(previous) = self.pending_exception.replace(exception) {
            tracing::trace!(%previous, "pending exception replaced");
        }
    }

    #[inline]
    pub fn has_pending_exception(&self) -> bool {
        self.pending_exception.is_some()
    }

    /// Clear and return the pending exception.
    pub fn take_pending_exception(&mut self) -> Option<Value> {
        self.pending_exception.take()
    }
}

#[cfg(test)]
mod tests;
