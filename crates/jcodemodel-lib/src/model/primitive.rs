//! The nine Java primitive kinds and their boxing table.

use std::fmt;
use std::str::FromStr;

use super::types::{FIRST_WRAPPER, TypeId};
use crate::Error;

/// Primitive type kinds, in the order their singletons are registered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum PrimitiveKind {
    Void = 0,
    Boolean = 1,
    Byte = 2,
    Short = 3,
    Char = 4,
    Int = 5,
    Float = 6,
    Long = 7,
    Double = 8,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        Self::Void,
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Char,
        Self::Int,
        Self::Float,
        Self::Long,
        Self::Double,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// The Java keyword.
    pub fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Float => "float",
            Self::Long => "long",
            Self::Double => "double",
        }
    }

    /// Exact keyword lookup. Case-sensitive, no trimming.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "void" => Some(Self::Void),
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "char" => Some(Self::Char),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "long" => Some(Self::Long),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// JVM descriptor character (`I` for int, `J` for long, ...).
    pub fn descriptor(self) -> char {
        match self {
            Self::Void => 'V',
            Self::Boolean => 'Z',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Char => 'C',
            Self::Int => 'I',
            Self::Float => 'F',
            Self::Long => 'J',
            Self::Double => 'D',
        }
    }

    /// Simple name of the wrapper class in `java.lang`.
    pub fn wrapper_simple_name(self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Char => "Character",
            Self::Int => "Integer",
            Self::Float => "Float",
            Self::Long => "Long",
            Self::Double => "Double",
        }
    }

    /// Fully qualified name of the wrapper class.
    pub fn wrapper_name(self) -> &'static str {
        match self {
            Self::Void => "java.lang.Void",
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Short => "java.lang.Short",
            Self::Char => "java.lang.Character",
            Self::Int => "java.lang.Integer",
            Self::Float => "java.lang.Float",
            Self::Long => "java.lang.Long",
            Self::Double => "java.lang.Double",
        }
    }

    /// Inverse of `wrapper_name`. Only the nine wrapper names match.
    pub fn from_wrapper_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.wrapper_name() == name)
    }

    /// Handle of this primitive's singleton in every `CodeModel`.
    #[inline]
    pub fn type_id(self) -> TypeId {
        TypeId(self as u32)
    }

    /// Handle of this primitive's wrapper class in every `CodeModel`.
    #[inline]
    pub(crate) fn wrapper_type_id(self) -> TypeId {
        TypeId(FIRST_WRAPPER + self as u32)
    }

    /// Primitive whose wrapper class was registered at `id`, if any.
    pub(crate) fn from_wrapper_type_id(id: TypeId) -> Option<Self> {
        let offset = id.0.checked_sub(FIRST_WRAPPER)?;
        u8::try_from(offset).ok().and_then(Self::from_u8)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::InvalidPrimitiveName(s.to_string()))
    }
}
