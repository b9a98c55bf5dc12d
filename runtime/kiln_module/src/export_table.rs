//! Export table: the fixed-key mapping from export name to binding cell.

use kiln_ir::Name;
use kiln_value::Cell;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Mapping from export name to the [`Cell`] backing it.
///
/// Keys are only ever added while the module is being instantiated; after
/// that the key set is frozen and only the values inside cells change.
#[derive(Clone, Debug, Default)]
pub struct ExportTable {
    cells: FxHashMap<Name, Cell>,
}

impl ExportTable {
    pub fn with_capacity(capacity: usize) -> Self {
        ExportTable {
            cells: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Create the binding for `name`, initialised to `undefined`.
    ///
    /// # Panics
    /// Panics if `name` already has a binding; creating one twice means the
    /// table is being built twice.
    pub(crate) fn create_binding(&mut self, name: Name) -> &Cell {
        match self.cells.entry(name) {
            Entry::Vacant(slot) => slot.insert(Cell::new()),
            Entry::Occupied(_) => panic!("export binding for {name:?} created twice"),
        }
    }

    /// The binding for `name`, if the module declared it.
    #[inline]
    pub fn get(&self, name: Name) -> Option<&Cell> {
        self.cells.get(&name)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.cells.contains_key(&name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Cell)> {
        self.cells.iter().map(|(&name, cell)| (name, cell))
    }
}
