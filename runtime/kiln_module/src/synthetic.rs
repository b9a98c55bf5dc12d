//! Synthetic module records.
//!
//! A synthetic module has no source text. Its export names are fixed when it
//! is created and its bindings are filled in by host-supplied
//! [`EvaluationSteps`]. This file covers construction, instantiation and the
//! export accessors; evaluation lives in `engine.rs`.

use std::fmt;

use kiln_ir::{Name, SharedInterner};
use kiln_value::{Capability, Cell, Value};
use rustc_hash::FxHashSet;

use crate::errors::{duplicate_export_name, undefined_export, unresolvable_export};
use crate::{EvaluationSteps, ExportTable, ModuleError, ModuleNamespace, ModuleStatus};

/// A module record whose exports are populated by host logic.
pub struct SyntheticModule {
    interner: SharedInterner,
    specifier: Name,
    /// Declared export names, in declaration order.
    export_names: Vec<Name>,
    /// `None` until `prepare_instantiate` builds it.
    exports: Option<ExportTable>,
    pub(crate) status: ModuleStatus,
    recorded_error: Option<Value>,
    /// Taken (and so emptied) the one time evaluation runs.
    pub(crate) evaluation_steps: Option<Box<dyn EvaluationSteps>>,
    pub(crate) top_level_capability: Option<Capability>,
}

impl SyntheticModule {
    /// Create a module without validating its export names.
    ///
    /// Duplicate names are a contract violation caught (by panic) in
    /// [`prepare_instantiate`](Self::prepare_instantiate). Use
    /// [`try_new`](Self::try_new) for names that have not been checked.
    pub fn new<I, S>(
        interner: SharedInterner,
        specifier: &str,
        export_names: I,
        steps: impl EvaluationSteps + 'static,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specifier = interner.intern(specifier);
        let export_names = export_names
            .into_iter()
            .map(|name| interner.intern(name.as_ref()))
            .collect();
        SyntheticModule {
            interner,
            specifier,
            export_names,
            exports: None,
            status: ModuleStatus::Unlinked,
            recorded_error: None,
            evaluation_steps: Some(Box::new(steps)),
            top_level_capability: None,
        }
    }

    /// Create a module, rejecting duplicate export names.
    pub fn try_new<I, S>(
        interner: SharedInterner,
        specifier: &str,
        export_names: I,
        steps: impl EvaluationSteps + 'static,
    ) -> Result<Self, ModuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let module = Self::new(interner, specifier, export_names, steps);
        let mut seen = FxHashSet::default();
        for &name in &module.export_names {
            if !seen.insert(name) {
                return Err(duplicate_export_name(module.interner.lookup(name))
                    .with_note(format!("in module '{}'", module.specifier())));
            }
        }
        Ok(module)
    }

    /// The module's own specifier.
    pub fn specifier(&self) -> &'static str {
        self.interner.lookup(self.specifier)
    }

    pub fn specifier_name(&self) -> Name {
        self.specifier
    }

    #[inline]
    pub fn status(&self) -> ModuleStatus {
        self.status
    }

    /// Declared export names, in declaration order.
    pub fn export_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.export_names
            .iter()
            .map(|&name| self.interner.lookup(name))
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// The value recorded when the module errored.
    #[inline]
    pub fn recorded_error(&self) -> Option<&Value> {
        self.recorded_error.as_ref()
    }

    /// The capability created by evaluation.
    #[inline]
    pub fn top_level_capability(&self) -> Option<&Capability> {
        self.top_level_capability.as_ref()
    }

    pub(crate) fn set_status(&mut self, next: ModuleStatus) {
        assert!(
            self.status.can_advance_to(next),
            "module '{}': illegal status transition {} -> {next}",
            self.specifier(),
            self.status,
        );
        tracing::trace!(module = %self.specifier(), from = %self.status, to = %next, "status");
        self.status = next;
    }

    /// Record `error` as the reason this module failed and move to `Errored`.
    ///
    /// # Panics
    /// Panics if an error was already recorded or the status is terminal.
    pub fn record_error(&mut self, error: Value) {
        assert!(
            self.recorded_error.is_none(),
            "module '{}': error recorded twice",
            self.specifier()
        );
        self.set_status(ModuleStatus::Errored);
        self.recorded_error = Some(error);
    }

    /// First step of instantiation: create one `undefined` binding per
    /// declared export name, in declaration order.
    ///
    /// Always returns `true`; a synthetic module has nothing to resolve.
    ///
    /// # Panics
    /// Panics when called more than once, or if two declared names collide.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %self.specifier()))]
    pub fn prepare_instantiate(&mut self) -> bool {
        assert!(
            self.exports.is_none(),
            "module '{}': prepare_instantiate called twice",
            self.specifier()
        );
        self.set_status(ModuleStatus::Linking);

        let mut exports = ExportTable::with_capacity(self.export_names.len());
        for &name in &self.export_names {
            exports.create_binding(name);
        }
        tracing::debug!(bindings = exports.len(), "export bindings created");
        self.exports = Some(exports);
        true
    }

    /// Second step of instantiation. There are no imports or indirect exports
    /// to resolve, so this only marks the module `Linked`.
    pub fn finish_instantiate(&mut self) -> bool {
        self.set_status(ModuleStatus::Linked);
        true
    }

    /// Both instantiation steps.
    pub fn instantiate(&mut self) -> bool {
        self.prepare_instantiate() && self.finish_instantiate()
    }

    /// Look up the binding for `export_name`.
    ///
    /// `module_specifier` is the specifier the requesting module used for
    /// this one; it only appears in the error. When the export is missing,
    /// returns `Ok(None)` unless `must_resolve` is set, in which case it fails
    /// with an unresolvable-export error.
    pub fn resolve_export(
        &self,
        module_specifier: &str,
        export_name: &str,
        must_resolve: bool,
    ) -> Result<Option<&Cell>, ModuleError> {
        if let Some(cell) = self.binding(export_name) {
            return Ok(Some(cell));
        }
        if !must_resolve {
            return Ok(None);
        }
        Err(unresolvable_export(module_specifier, export_name))
    }

    /// Overwrite the value of a declared export.
    ///
    /// Fails without touching any binding if `export_name` was not declared.
    pub fn set_export(&self, export_name: &str, value: Value) -> Result<(), ModuleError> {
        let Some(cell) = self.binding(export_name) else {
            return Err(undefined_export(export_name)
                .with_note(format!("in module '{}'", self.specifier())));
        };
        cell.set(value);
        Ok(())
    }

    /// Overwrite the value of an export the caller knows was declared.
    ///
    /// # Panics
    /// Panics if `export_name` has no binding.
    pub fn set_export_strict(&self, export_name: &str, value: Value) {
        let Some(cell) = self.binding(export_name) else {
            panic!(
                "module '{}': strict write to undeclared export '{export_name}'",
                self.specifier()
            );
        };
        cell.set(value);
    }

    /// Sorted, live view of the exports, once the bindings exist.
    pub fn namespace(&self) -> Option<ModuleNamespace> {
        if self.status == ModuleStatus::Linking {
            return None;
        }
        let exports = self.exports.as_ref()?;
        Some(ModuleNamespace::new(self.specifier(), exports, &self.interner))
    }

    /// Names nobody has interned cannot have a binding, so the lookup never
    /// interns.
    fn binding(&self, export_name: &str) -> Option<&Cell> {
        let name = self.interner.get(export_name)?;
        self.exports.as_ref()?.get(name)
    }
}

impl fmt::Debug for SyntheticModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticModule")
            .field("specifier", &self.specifier())
            .field("export_names", &self.export_names().collect::<Vec<_>>())
            .field("status", &self.status)
            .field("recorded_error", &self.recorded_error)
            .field("top_level_capability", &self.top_level_capability)
            .finish_non_exhaustive()
    }
}
