//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::context::CodeModel;
use super::types::{TypeId, TypeKind};

impl CodeModel {
    pub(crate) fn ensure_type(&self, id: TypeId) -> &TypeKind {
        self.get_type(id).unwrap_or_else(|| {
            panic!(
                "CodeModel: type id {} not found \
                 (out of range for this model)",
                id.as_u32()
            )
        })
    }
}
