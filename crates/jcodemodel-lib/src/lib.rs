//! jcodemodel: the type model of a Java source code generator.
//!
//! This crate provides:
//! - `model` - canonical primitive, reference and array types owned by a `CodeModel`
//! - `imports` - import listing built on the model's display order
//!
//! Every type is requested from a `CodeModel` and comes back as a `TypeId`
//! handle. Asking for the same logical type twice yields the same handle, so
//! handles can be compared, hashed and deduplicated directly.
//!
//! ```
//! use jcodemodel_lib::{CodeModel, INT};
//!
//! let mut model = CodeModel::new();
//! let ints = model.array(INT).unwrap();
//! assert_eq!(model.full_name(ints), "int[]");
//! assert_eq!(model.full_name(model.boxify(INT)), "java.lang.Integer");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod imports;
pub mod model;

pub use imports::{Config as ImportConfig, ImportSet};
pub use model::{
    BOOLEAN, BYTE, CHAR, CodeModel, DOUBLE, FLOAT, INT, LONG, PrimitiveKind, ReferenceType, SHORT,
    TypeId, TypeKind, TypeView, VOID, display_cmp, parse,
};

/// Errors reported by the type model.
///
/// All of them are caller-usage errors, reported at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `parse` was given something other than one of the nine primitive keywords.
    #[error("not a primitive type: {0}")]
    InvalidPrimitiveName(String),

    /// `array` was invoked on `void`.
    #[error("void has no array type")]
    UnsupportedArrayOfVoid,

    /// `element_type` was invoked on a non-array type.
    #[error("not an array type: {0}")]
    NotAnArrayType(String),

    #[error("invalid class name: {0:?}")]
    InvalidClassName(String),

    /// Nesting and narrowing require a raw class reference.
    #[error("not a class type: {0}")]
    NotAClass(String),

    #[error("type argument list cannot be empty")]
    EmptyTypeArguments,

    #[error("void cannot be used as a type argument")]
    VoidTypeArgument,
}

/// Result type for type model operations.
pub type Result<T> = std::result::Result<T, Error>;
