//! Module namespace: a sorted, live view of a module's exports.

use kiln_ir::StringInterner;
use kiln_value::{Cell, Value};
use smallvec::SmallVec;

use crate::ExportTable;

/// Exports of one module, sorted by name.
///
/// Holds the module's cells, not copies of their values: reads after the
/// module writes an export observe the new value.
#[derive(Clone, Debug)]
pub struct ModuleNamespace {
    specifier: &'static str,
    entries: SmallVec<[(&'static str, Cell); 8]>,
}

impl ModuleNamespace {
    pub(crate) fn new(
        specifier: &'static str,
        exports: &ExportTable,
        interner: &StringInterner,
    ) -> Self {
        let mut entries: SmallVec<[(&'static str, Cell); 8]> = exports
            .iter()
            .map(|(name, cell)| (interner.lookup(name), cell.clone()))
            .collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        ModuleNamespace { specifier, entries }
    }

    pub fn specifier(&self) -> &'static str {
        self.specifier
    }

    /// Current value of `name`, or `None` if the module has no such export.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries
            .binary_search_by(|(probe, _)| (*probe).cmp(name))
            .ok()
            .map(|index| self.entries[index].1.get())
    }

    /// Export names in sorted order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// `(name, current value)` pairs in sorted order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&'static str, Value)> + '_ {
        self.entries.iter().map(|(name, cell)| (*name, cell.get()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
