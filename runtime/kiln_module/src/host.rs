//! The contract between a synthetic module and the host code that fills it.

use kiln_value::Value;

use crate::{ExecutionContext, SyntheticModule};

/// Host-supplied evaluation steps of a synthetic module.
///
/// Called once, during evaluation. The steps populate the module's exports
/// through [`SyntheticModule::set_export`] or
/// [`SyntheticModule::set_export_strict`] and return either a
/// [`Capability`](kiln_value::Capability) value for asynchronous completion
/// or any other value.
///
/// `Err` carries the thrown value.
pub trait EvaluationSteps {
    fn run(
        self: Box<Self>,
        cx: &mut ExecutionContext,
        module: &SyntheticModule,
    ) -> Result<Value, Value>;
}

impl<F> EvaluationSteps for F
where
    F: FnOnce(&mut ExecutionContext, &SyntheticModule) -> Result<Value, Value>,
{
    fn run(
        self: Box<Self>,
        cx: &mut ExecutionContext,
        module: &SyntheticModule,
    ) -> Result<Value, Value> {
        (*self)(cx, module)
    }
}

/// Pin a closure to the [`EvaluationSteps`] signature.
///
/// Closures passed straight to [`SyntheticModule::new`] have nothing to infer
/// their argument types from; wrapping them here does.
///
/// ```ignore
/// let module = SyntheticModule::new(interner, "env", ["mode"], steps_fn(|_cx, module| {
///     module.set_export_strict("mode", Value::string("release"));
///     Ok(Value::Undefined)
/// }));
/// ```
pub fn steps_fn<F>(f: F) -> F
where
    F: FnOnce(&mut ExecutionContext, &SyntheticModule) -> Result<Value, Value>,
{
    f
}
