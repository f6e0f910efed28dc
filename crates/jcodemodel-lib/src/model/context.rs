//! CodeModel: owns and canonicalizes every type of one generation session.
//!
//! Types are interned so that requesting the same logical type twice yields
//! the same `TypeId`. Names are interned so class keys stay small and cheap
//! to hash.

use std::collections::HashMap;

use jcodemodel_core::names::{is_qualified_name, split_qualified};
use jcodemodel_core::{NameId, NameTable};
use tracing::{debug, trace};

use super::primitive::PrimitiveKind;
use super::types::{FIRST_WRAPPER, ReferenceType, TypeId, TypeKind, VOID};
use super::view::TypeView;
use crate::{Error, Result};

const JAVA_LANG: &str = "java.lang";

/// Central registry for the types of one generation session.
#[derive(Debug, Clone)]
pub struct CodeModel {
    /// Package and simple class names
    names: NameTable,
    /// Interned types by ID
    types: Vec<TypeKind>,
    /// Deduplication map for type interning
    type_map: HashMap<TypeKind, TypeId>,
}

impl Default for CodeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeModel {
    pub fn new() -> Self {
        let mut model = Self {
            names: NameTable::new(),
            types: Vec::new(),
            type_map: HashMap::new(),
        };

        // Pre-register primitives and their wrappers at their expected IDs
        for kind in PrimitiveKind::ALL {
            let id = model.intern_type(TypeKind::Primitive(kind));
            debug_assert_eq!(id, kind.type_id());
        }

        let java_lang = model.names.intern(JAVA_LANG);
        for kind in PrimitiveKind::ALL {
            let name = model.names.intern(kind.wrapper_simple_name());
            let id = model.intern_type(TypeKind::Reference(ReferenceType::Class {
                package: java_lang,
                outer: None,
                name,
            }));
            debug_assert_eq!(id, kind.wrapper_type_id());
        }
        debug_assert_eq!(model.types.len() as u32, FIRST_WRAPPER + 9);

        model
    }

    // ========== Interning ==========

    /// Intern a type, returning its ID. Deduplicates identical types.
    pub(crate) fn intern_type(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.type_map.get(&kind) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        trace!(id = id.as_u32(), kind = ?kind, "interned type");
        self.types.push(kind.clone());
        self.type_map.insert(kind, id);
        id
    }

    /// Get the TypeKind for a TypeId.
    pub fn get_type(&self, id: TypeId) -> Option<&TypeKind> {
        self.types.get(id.index())
    }

    /// Get the TypeKind for a TypeId.
    ///
    /// # Panics
    /// Panics if the handle was not issued by this model.
    pub fn kind(&self, id: TypeId) -> &TypeKind {
        self.ensure_type(id)
    }

    #[inline]
    pub(crate) fn resolve(&self, name: NameId) -> &str {
        self.names.resolve(name)
    }

    /// Borrowed handle bundling `id` with this model.
    pub fn view(&self, id: TypeId) -> TypeView<'_> {
        self.ensure_type(id);
        TypeView::new(self, id)
    }

    // ========== Primitives ==========

    /// The canonical singleton for a primitive kind.
    #[inline]
    pub fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    /// Obtain the primitive type for one of the nine Java keywords.
    pub fn parse(&self, name: &str) -> Result<TypeId> {
        match PrimitiveKind::from_name(name) {
            Some(kind) => Ok(self.primitive(kind)),
            None => {
                debug!(name, "rejected primitive name");
                Err(Error::InvalidPrimitiveName(name.to_string()))
            }
        }
    }

    /// The primitive kind of `id`, if it is a primitive.
    pub fn as_primitive(&self, id: TypeId) -> Option<PrimitiveKind> {
        match self.ensure_type(id) {
            TypeKind::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    // ========== References ==========

    /// Get or create a top-level class by its dotted name, e.g. `java.util.List`.
    ///
    /// The class name itself may not contain `$`; nested classes are created
    /// with `nested`, so `java.util.Map$Entry` is rejected.
    pub fn reference(&mut self, qualified_name: &str) -> Result<TypeId> {
        if !is_class_name(qualified_name) {
            debug!(name = qualified_name, "rejected class name");
            return Err(Error::InvalidClassName(qualified_name.to_string()));
        }

        let (package, name) = split_qualified(qualified_name);
        let package = self.names.intern(package);
        let name = self.names.intern(name);
        Ok(self.intern_type(TypeKind::Reference(ReferenceType::Class {
            package,
            outer: None,
            name,
        })))
    }

    /// Look up a top-level class without creating it.
    pub fn lookup(&self, qualified_name: &str) -> Option<TypeId> {
        let (package, name) = split_qualified(qualified_name);
        let key = TypeKind::Reference(ReferenceType::Class {
            package: self.names.get(package)?,
            outer: None,
            name: self.names.get(name)?,
        });
        self.type_map.get(&key).copied()
    }

    /// Get or create the class `name` nested inside `outer`.
    pub fn nested(&mut self, outer: TypeId, name: &str) -> Result<TypeId> {
        let package = match self.ensure_type(outer) {
            TypeKind::Reference(ReferenceType::Class { package, .. }) => *package,
            _ => return Err(Error::NotAClass(self.full_name(outer))),
        };
        if !is_class_name(name) || name.contains('.') {
            debug!(name, "rejected nested class name");
            return Err(Error::InvalidClassName(name.to_string()));
        }

        let name = self.names.intern(name);
        Ok(self.intern_type(TypeKind::Reference(ReferenceType::Class {
            package,
            outer: Some(outer),
            name,
        })))
    }

    /// Get or create the parameterization of the raw class `basis` with `args`.
    ///
    /// Primitive arguments are replaced by their wrapper classes.
    pub fn narrow(&mut self, basis: TypeId, args: &[TypeId]) -> Result<TypeId> {
        if !matches!(
            self.ensure_type(basis),
            TypeKind::Reference(ReferenceType::Class { .. })
        ) {
            return Err(Error::NotAClass(self.full_name(basis)));
        }
        if args.is_empty() {
            return Err(Error::EmptyTypeArguments);
        }

        let mut boxed = Vec::with_capacity(args.len());
        for &arg in args {
            if arg == VOID {
                return Err(Error::VoidTypeArgument);
            }
            boxed.push(self.boxify(arg));
        }

        Ok(self.intern_type(TypeKind::Reference(ReferenceType::Parameterized {
            basis,
            args: boxed,
        })))
    }

    /// Package of a reference type; `None` for primitives and arrays.
    pub fn package_name(&self, id: TypeId) -> Option<&str> {
        match self.ensure_type(id) {
            TypeKind::Reference(ReferenceType::Class { package, .. }) => {
                Some(self.resolve(*package))
            }
            TypeKind::Reference(ReferenceType::Parameterized { basis, .. }) => {
                self.package_name(*basis)
            }
            _ => None,
        }
    }

    /// Enclosing class of a nested class.
    pub fn outer(&self, id: TypeId) -> Option<TypeId> {
        match self.ensure_type(id) {
            TypeKind::Reference(ReferenceType::Class { outer, .. }) => *outer,
            TypeKind::Reference(ReferenceType::Parameterized { basis, .. }) => self.outer(*basis),
            _ => None,
        }
    }

    /// Type arguments of a parameterized reference; empty for everything else.
    pub fn type_arguments(&self, id: TypeId) -> &[TypeId] {
        match self.ensure_type(id) {
            TypeKind::Reference(ReferenceType::Parameterized { args, .. }) => args,
            _ => &[],
        }
    }

    // ========== Arrays ==========

    /// Get or create the array type whose element type is `id`.
    ///
    /// `void` has no array form.
    pub fn array(&mut self, id: TypeId) -> Result<TypeId> {
        self.ensure_type(id);
        if id == VOID {
            return Err(Error::UnsupportedArrayOfVoid);
        }
        Ok(self.intern_type(TypeKind::Array(id)))
    }

    /// Element type of an array (`T` of `T[]`).
    pub fn element_type(&self, id: TypeId) -> Result<TypeId> {
        match self.ensure_type(id) {
            TypeKind::Array(element) => Ok(*element),
            _ => Err(Error::NotAnArrayType(self.full_name(id))),
        }
    }

    // ========== Classification ==========

    pub fn is_primitive(&self, id: TypeId) -> bool {
        self.ensure_type(id).is_primitive()
    }

    pub fn is_reference(&self, id: TypeId) -> bool {
        !self.is_primitive(id)
    }

    pub fn is_array(&self, id: TypeId) -> bool {
        self.ensure_type(id).is_array()
    }

    // ========== Conversions ==========

    /// Wrapper class for a primitive; every other type is returned unchanged.
    pub fn boxify(&self, id: TypeId) -> TypeId {
        match self.ensure_type(id) {
            TypeKind::Primitive(kind) => kind.wrapper_type_id(),
            _ => id,
        }
    }

    /// Primitive for one of the nine wrapper classes; every other type is
    /// returned unchanged.
    pub fn unboxify(&self, id: TypeId) -> TypeId {
        self.ensure_type(id);
        match PrimitiveKind::from_wrapper_type_id(id) {
            Some(kind) => kind.type_id(),
            None => id,
        }
    }

    /// Raw class of a parameterized reference; every other type is returned unchanged.
    pub fn erasure(&self, id: TypeId) -> TypeId {
        match self.ensure_type(id) {
            TypeKind::Reference(ReferenceType::Parameterized { basis, .. }) => *basis,
            _ => id,
        }
    }

    // ========== Iteration ==========

    /// Iterate over all interned types.
    pub fn iter_types(&self) -> impl Iterator<Item = (TypeId, &TypeKind)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, k)| (TypeId(i as u32), k))
    }

    /// Number of interned types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

/// Dotted identifiers, none of which is a primitive keyword; the last one has no `$`.
fn is_class_name(s: &str) -> bool {
    is_qualified_name(s)
        && s.split('.').all(|segment| PrimitiveKind::from_name(segment).is_none())
        && !split_qualified(s).1.contains('$')
}
