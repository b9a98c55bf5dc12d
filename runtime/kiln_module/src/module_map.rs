//! Host-side module map: owns module records and keys them by specifier.
//!
//! The record-level operations on [`SyntheticModule`] treat misuse as a bug in
//! the caller and panic. The map sits at the embedding boundary instead, so it
//! checks status first and reports misuse as [`ModuleError`]s.

use std::fmt;

use kiln_ir::{Name, SharedInterner};
use kiln_value::{Capability, Cell, Value};
use rustc_hash::FxHashMap;

use crate::errors::{duplicate_module, host_evaluation, invalid_status};
use crate::{
    json_module, EvaluationSteps, ExecutionContext, ModuleError, ModuleNamespace, ModuleStatus,
    SyntheticModule,
};

/// Index of a module in its [`ModuleMap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Builder for [`ModuleMap`].
#[derive(Default)]
pub struct ModuleMapBuilder {
    interner: Option<SharedInterner>,
    capacity: usize,
}

impl ModuleMapBuilder {
    /// Share an existing interner instead of creating one.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Reserve room for `capacity` modules.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> ModuleMap {
        let interner = self.interner.unwrap_or_default();
        ModuleMap {
            cx: ExecutionContext::new(interner.clone()),
            interner,
            modules: Vec::with_capacity(self.capacity),
            by_specifier: FxHashMap::default(),
        }
    }
}

/// Registry of module records.
pub struct ModuleMap {
    interner: SharedInterner,
    cx: ExecutionContext,
    modules: Vec<SyntheticModule>,
    by_specifier: FxHashMap<Name, ModuleId>,
}

impl ModuleMap {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ModuleMapBuilder {
        ModuleMapBuilder::default()
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Register a module created with this map's interner.
    ///
    /// # Panics
    /// Panics if the module was created with a different interner.
    pub fn insert(&mut self, module: SyntheticModule) -> Result<ModuleId, ModuleError> {
        assert!(
            module.interner().ptr_eq(&self.interner),
            "module '{}' was created with a different interner",
            module.specifier()
        );
        let specifier = module.specifier_name();
        if self.by_specifier.contains_key(&specifier) {
            return Err(duplicate_module(module.specifier()));
        }
        let raw = u32::try_from(self.modules.len()).unwrap_or_else(|_| {
            panic!("module map exceeded {} modules", u32::MAX);
        });
        let id = ModuleId(raw);
        tracing::debug!(module = %module.specifier(), %id, "module registered");
        self.modules.push(module);
        self.by_specifier.insert(specifier, id);
        Ok(id)
    }

    /// Create and register a synthetic module.
    pub fn create_synthetic<I, S>(
        &mut self,
        specifier: &str,
        export_names: I,
        steps: impl EvaluationSteps + 'static,
    ) -> Result<ModuleId, ModuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let module =
            SyntheticModule::try_new(self.interner.clone(), specifier, export_names, steps)?;
        self.insert(module)
    }

    /// Create and register a JSON module.
    pub fn create_json(
        &mut self,
        specifier: &str,
        source: impl Into<String>,
    ) -> Result<ModuleId, ModuleError> {
        let module = json_module(self.interner.clone(), specifier, source);
        self.insert(module)
    }

    /// Find a module by specifier.
    pub fn lookup(&self, specifier: &str) -> Option<ModuleId> {
        let name = self.interner.get(specifier)?;
        self.by_specifier.get(&name).copied()
    }

    /// # Panics
    /// Panics if `id` came from another map.
    #[inline]
    pub fn get(&self, id: ModuleId) -> &SyntheticModule {
        &self.modules[id.index()]
    }

    pub fn status(&self, id: ModuleId) -> ModuleStatus {
        self.get(id).status()
    }

    /// The value the module recorded when it errored.
    pub fn exception(&self, id: ModuleId) -> Option<&Value> {
        self.get(id).recorded_error()
    }

    pub fn capability(&self, id: ModuleId) -> Option<&Capability> {
        self.get(id).top_level_capability()
    }

    pub fn namespace(&self, id: ModuleId) -> Option<ModuleNamespace> {
        self.get(id).namespace()
    }

    /// Strictly resolve `export_name` in the module, returning a handle to
    /// its binding.
    pub fn resolve_export(&self, id: ModuleId, export_name: &str) -> Result<Cell, ModuleError> {
        let module = self.get(id);
        match module.resolve_export(module.specifier(), export_name, true)? {
            Some(cell) => Ok(cell.clone()),
            None => unreachable!("strict resolution returned no binding"),
        }
    }

    /// Instantiate the module if it has not been instantiated yet.
    ///
    /// Already linked or evaluated modules are left alone. An errored module
    /// cannot be instantiated.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn instantiate(&mut self, id: ModuleId) -> Result<(), ModuleError> {
        let module = &mut self.modules[id.index()];
        match module.status() {
            ModuleStatus::Unlinked => {
                module.instantiate();
                Ok(())
            }
            ModuleStatus::Linked | ModuleStatus::Evaluating | ModuleStatus::Evaluated => Ok(()),
            status @ (ModuleStatus::Linking | ModuleStatus::Errored) => {
                Err(invalid_status(module.specifier(), "instantiate", status))
            }
        }
    }

    /// Evaluate the module, returning its top-level capability.
    ///
    /// Evaluating an evaluated module returns the existing capability without
    /// running the host again. An errored module fails again with its recorded
    /// error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&mut self, id: ModuleId) -> Result<Capability, ModuleError> {
        let module = &mut self.modules[id.index()];
        match module.status() {
            ModuleStatus::Linked => {
                module.evaluate(&mut self.cx)?;
                match module.top_level_capability() {
                    Some(capability) => Ok(capability.clone()),
                    None => unreachable!("evaluated module without a capability"),
                }
            }
            ModuleStatus::Evaluated => match module.top_level_capability() {
                Some(capability) => Ok(capability.clone()),
                None => unreachable!("evaluated module without a capability"),
            },
            ModuleStatus::Errored => {
                let thrown = module.recorded_error().cloned().unwrap_or_default();
                Err(host_evaluation(module.specifier(), thrown))
            }
            status @ (ModuleStatus::Unlinked
            | ModuleStatus::Linking
            | ModuleStatus::Evaluating) => {
                Err(invalid_status(module.specifier(), "evaluate", status))
            }
        }
    }

    /// Instantiate then evaluate.
    pub fn load(&mut self, id: ModuleId) -> Result<Capability, ModuleError> {
        self.instantiate(id)?;
        self.evaluate(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &SyntheticModule)> {
        (0u32..).zip(&self.modules).map(|(raw, module)| (ModuleId(raw), module))
    }
}

impl Default for ModuleMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModuleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleMap")
            .field("modules", &self.modules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
