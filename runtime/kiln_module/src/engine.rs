//! Evaluation engine: runs a module's host steps and normalises the outcome
//! into the module's top-level capability.

use kiln_value::{Capability, Value};

use crate::errors::host_evaluation;
use crate::{ExecutionContext, ModuleError, ModuleStatus, SyntheticModule};

impl SyntheticModule {
    /// Evaluate a linked module.
    ///
    /// Runs the host steps exactly once. On success the module becomes
    /// `Evaluated` and its top-level capability is set: the returned value
    /// itself when the steps returned a capability, otherwise a new capability
    /// resolved with `undefined`. The host's value is returned unchanged in
    /// both cases.
    ///
    /// When the steps throw, or leave an exception pending on the context,
    /// the exception is recorded on the module, the module becomes `Errored`,
    /// no capability is created, and the error is returned. A pending
    /// exception wins over the returned one.
    ///
    /// # Panics
    /// Panics unless the module is `Linked`. Evaluating twice, or from inside
    /// its own steps, is a contract violation.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %self.specifier()))]
    pub fn evaluate(&mut self, cx: &mut ExecutionContext) -> Result<Value, ModuleError> {
        assert_eq!(
            self.status,
            ModuleStatus::Linked,
            "module '{}' evaluated in the wrong status",
            self.specifier()
        );
        self.set_status(ModuleStatus::Evaluating);

        let Some(steps) = self.evaluation_steps.take() else {
            panic!("module '{}': evaluation steps already ran", self.specifier());
        };

        // A pending exception outlives the call, so it is always drained here
        // and fails the module even when the steps returned normally.
        let outcome = steps.run(cx, self);
        let result = match (outcome, cx.take_pending_exception()) {
            (_, Some(thrown)) | (Err(thrown), None) => {
                tracing::warn!(module = %self.specifier(), %thrown, "evaluation steps threw");
                self.record_error(thrown.clone());
                return Err(host_evaluation(self.specifier(), thrown));
            }
            (Ok(result), None) => result,
        };

        self.set_status(ModuleStatus::Evaluated);

        // Steps that predate capability-returning evaluation still get an
        // observable completion. The synthesised capability resolves to
        // `undefined`, not to the returned value.
        let capability = match result.as_capability() {
            Some(capability) => capability.clone(),
            None => {
                if !result.is_undefined() {
                    tracing::trace!(
                        returned = result.type_name(),
                        "returned value not carried by the capability"
                    );
                }
                Capability::resolved(Value::Undefined)
            }
        };
        debug_assert!(self.top_level_capability.is_none());
        self.top_level_capability = Some(capability);

        tracing::debug!(%result, "module evaluated");
        Ok(result)
    }
}
