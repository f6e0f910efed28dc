//! Borrowed type handle.

use std::cmp::Ordering;
use std::fmt;

use super::context::CodeModel;
use super::primitive::PrimitiveKind;
use super::types::{TypeId, TypeKind};
use crate::Result;

/// A `TypeId` together with the model that owns it.
///
/// Offers the read-only queries of `CodeModel` as methods. Displays as the
/// full name.
#[derive(Clone, Copy)]
pub struct TypeView<'m> {
    model: &'m CodeModel,
    id: TypeId,
}

impl<'m> TypeView<'m> {
    pub(crate) fn new(model: &'m CodeModel, id: TypeId) -> Self {
        Self { model, id }
    }

    /// The model that owns this type.
    pub fn owner(&self) -> &'m CodeModel {
        self.model
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn kind(&self) -> &'m TypeKind {
        self.model.kind(self.id)
    }

    pub fn full_name(&self) -> String {
        self.model.full_name(self.id)
    }

    pub fn binary_name(&self) -> String {
        self.model.binary_name(self.id)
    }

    pub fn name(&self) -> String {
        self.model.name(self.id)
    }

    pub fn descriptor(&self) -> String {
        self.model.descriptor(self.id)
    }

    pub fn is_primitive(&self) -> bool {
        self.model.is_primitive(self.id)
    }

    pub fn is_reference(&self) -> bool {
        self.model.is_reference(self.id)
    }

    pub fn is_array(&self) -> bool {
        self.model.is_array(self.id)
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        self.model.as_primitive(self.id)
    }

    pub fn boxify(&self) -> Self {
        self.with(self.model.boxify(self.id))
    }

    pub fn unboxify(&self) -> Self {
        self.with(self.model.unboxify(self.id))
    }

    pub fn erasure(&self) -> Self {
        self.with(self.model.erasure(self.id))
    }

    pub fn element_type(&self) -> Result<Self> {
        self.model.element_type(self.id).map(|id| self.with(id))
    }

    /// Display order; see `CodeModel::compare`.
    pub fn compare(&self, other: &TypeView<'_>) -> Ordering {
        self.model.compare(self.id, other.id)
    }

    fn with(&self, id: TypeId) -> Self {
        Self::new(self.model, id)
    }
}

impl PartialEq for TypeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.model, other.model) && self.id == other.id
    }
}

impl Eq for TypeView<'_> {}

impl fmt::Display for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl fmt::Debug for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self.kind() {
            TypeKind::Primitive(_) => "Primitive",
            TypeKind::Reference(_) => "Reference",
            TypeKind::Array(_) => "Array",
        };
        write!(f, "{variant}({})", self.full_name())
    }
}
