//! Display order for sorted listings such as import statements.
//!
//! Types whose full name starts with `java` (which includes `javax`) come
//! first; within each group, full names compare lexicographically. This order
//! says nothing about type compatibility.

use std::cmp::Ordering;

use super::context::CodeModel;
use super::types::TypeId;

const JAVA_PREFIX: &str = "java";

/// Compare two full names by display order.
pub fn display_cmp(lhs: &str, rhs: &str) -> Ordering {
    let p = lhs.starts_with(JAVA_PREFIX);
    let q = rhs.starts_with(JAVA_PREFIX);

    match (p, q) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => lhs.cmp(rhs),
    }
}

/// Precomputed sort key; ties on full name fall back to binary name, then handle.
#[derive(PartialEq, Eq)]
struct DisplayKey {
    full: String,
    binary: String,
    id: TypeId,
}

impl Ord for DisplayKey {
    fn cmp(&self, other: &Self) -> Ordering {
        display_cmp(&self.full, &other.full)
            .then_with(|| self.binary.cmp(&other.binary))
            .then_with(|| self.id.as_u32().cmp(&other.id.as_u32()))
    }
}

impl PartialOrd for DisplayKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl CodeModel {
    /// Strict total order over the types of this model, for display.
    pub fn compare(&self, a: TypeId, b: TypeId) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.display_key(a).cmp(&self.display_key(b))
    }

    /// Sort handles in display order.
    pub fn sort(&self, types: &mut [TypeId]) {
        types.sort_by_cached_key(|&id| self.display_key(id));
    }

    fn display_key(&self, id: TypeId) -> DisplayKey {
        DisplayKey {
            full: self.full_name(id),
            binary: self.binary_name(id),
            id,
        }
    }
}
