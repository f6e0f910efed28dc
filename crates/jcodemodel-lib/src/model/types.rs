//! Type handles and the structural description stored behind them.

use jcodemodel_core::NameId;

use super::primitive::PrimitiveKind;

/// Interned type identifier. Types are stored in a `CodeModel` and referenced by ID.
///
/// Two handles from the same model are equal exactly when they denote the same
/// logical type. Handles carry no ordering; use `CodeModel::compare` for
/// display order.
///
/// A handle only means something to the model that issued it. Out-of-range
/// handles panic; an in-range handle from another model is not detected and
/// names whatever type this model stores at that index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeId(pub(crate) u32);

pub const VOID: TypeId = TypeId(0);
pub const BOOLEAN: TypeId = TypeId(1);
pub const BYTE: TypeId = TypeId(2);
pub const SHORT: TypeId = TypeId(3);
pub const CHAR: TypeId = TypeId(4);
pub const INT: TypeId = TypeId(5);
pub const FLOAT: TypeId = TypeId(6);
pub const LONG: TypeId = TypeId(7);
pub const DOUBLE: TypeId = TypeId(8);

/// First handle of the pre-registered wrapper classes (`java.lang.Void`).
pub(crate) const FIRST_WRAPPER: u32 = 9;

impl TypeId {
    /// Raw index, for debugging output.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this handle is one of the nine primitive singletons.
    pub fn is_builtin_primitive(self) -> bool {
        self.0 < FIRST_WRAPPER
    }
}

/// The kind of a type, determining its structure.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    /// Built-in primitive, including `void`
    Primitive(PrimitiveKind),
    /// Class or interface, raw or parameterized
    Reference(ReferenceType),
    /// Array with its element type
    Array(TypeId),
}

impl TypeKind {
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeKind::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeKind::Array(_))
    }
}

/// A named reference type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ReferenceType {
    /// Raw class. Nested classes record their enclosing class in `outer` and
    /// share its package.
    Class {
        package: NameId,
        outer: Option<TypeId>,
        name: NameId,
    },
    /// Generic class applied to type arguments, e.g. `List<String>`.
    /// `basis` always points to a raw `Class`.
    Parameterized { basis: TypeId, args: Vec<TypeId> },
}
