//! Package and simple class names, stored once per code model.

use indexmap::IndexSet;

/// Index of a name in its `NameTable`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NameId(u32);

/// Append-only set of names; a name's position is its `NameId`.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: IndexSet<Box<str>>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> NameId {
        if let Some(id) = self.get(name) {
            return id;
        }
        let (index, _) = self.names.insert_full(name.into());
        NameId(index as u32)
    }

    /// Look up a name without adding it.
    pub fn get(&self, name: &str) -> Option<NameId> {
        self.names.get_index_of(name).map(|index| NameId(index as u32))
    }

    /// # Panics
    /// Panics if `id` was not issued by this table.
    pub fn resolve(&self, id: NameId) -> &str {
        &self.names[id.0 as usize]
    }
}
