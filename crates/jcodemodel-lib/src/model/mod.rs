//! Canonical type model.
//!
//! A `CodeModel` owns every type it hands out:
//! - the nine primitive singletons, pre-registered at fixed handles
//! - the nine `java.lang` wrapper classes, pre-registered right after them
//! - class references, deduplicated by package, enclosing class and name
//! - parameterized references and array types, memoized per component
//!
//! Queries (`full_name`, `boxify`, `erasure`, ...) take `&self`; anything that
//! may populate the model (`reference`, `nested`, `narrow`, `array`) takes
//! `&mut self`.

mod context;
mod invariants;
mod naming;
mod order;
mod primitive;
mod types;
mod view;

pub use context::CodeModel;
pub use order::display_cmp;
pub use primitive::PrimitiveKind;
pub use types::{
    BOOLEAN, BYTE, CHAR, DOUBLE, FLOAT, INT, LONG, ReferenceType, SHORT, TypeId, TypeKind, VOID,
};
pub use view::TypeView;

use crate::Result;

/// Obtain the canonical primitive type for one of the nine Java keywords.
///
/// Matching is exact: no trimming, no case folding.
pub fn parse(model: &CodeModel, name: &str) -> Result<TypeId> {
    model.parse(name)
}

#[cfg(test)]
mod view_tests;
