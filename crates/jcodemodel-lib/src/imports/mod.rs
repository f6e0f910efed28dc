//! Import listings for generated compilation units.
//!
//! An `ImportSet` records which classes a compilation unit refers to; the
//! listing is sorted by the model's display order, so `java`/`javax`
//! imports come first.

mod config;
mod render;

pub use config::Config;

use indexmap::IndexSet;
use tracing::trace;

use crate::model::{CodeModel, ReferenceType, TypeId, TypeKind};

/// Deduplicated set of classes referenced by a compilation unit.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    types: IndexSet<TypeId>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every class that mentioning `id` requires.
    ///
    /// Arrays contribute their element type, parameterized references their
    /// raw class and each argument, nested classes their outermost enclosing
    /// class. Primitives contribute nothing.
    pub fn add(&mut self, model: &CodeModel, id: TypeId) {
        match model.kind(id) {
            TypeKind::Primitive(_) => {}
            TypeKind::Array(element) => self.add(model, *element),
            TypeKind::Reference(ReferenceType::Parameterized { basis, args }) => {
                self.add(model, *basis);
                for &arg in args {
                    self.add(model, arg);
                }
            }
            TypeKind::Reference(ReferenceType::Class { .. }) => {
                let mut top = id;
                while let Some(outer) = model.outer(top) {
                    top = outer;
                }
                if self.types.insert(top) {
                    trace!(import = %model.full_name(top), "recorded import");
                }
            }
        }
    }

    pub fn extend(&mut self, model: &CodeModel, ids: impl IntoIterator<Item = TypeId>) {
        for id in ids {
            self.add(model, id);
        }
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Recorded classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.iter().copied()
    }

    /// Classes that need an import statement, in display order.
    pub fn sorted(&self, model: &CodeModel, config: &Config) -> Vec<TypeId> {
        let mut out: Vec<TypeId> = self
            .iter()
            .filter(|&id| {
                model
                    .package_name(id)
                    .is_some_and(|package| !config.skips_package(package))
            })
            .collect();
        model.sort(&mut out);
        out
    }
}

#[cfg(test)]
mod imports_tests;
