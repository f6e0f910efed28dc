//! Textual names of types.
//!
//! | type              | full name                          | binary name           | name             |
//! |-------------------|------------------------------------|-----------------------|------------------|
//! | primitive         | `int`                              | `int`                 | `int`            |
//! | class             | `java.util.Map`                    | `java.util.Map`       | `Map`            |
//! | nested class      | `java.util.Map.Entry`              | `java.util.Map$Entry` | `Entry`          |
//! | parameterized     | `java.util.List<java.lang.String>` | same, binary args     | `List<String>`   |
//! | array             | `java.util.Map.Entry[]`            | `java.util.Map$Entry[]` | `Entry[]`      |

use jcodemodel_core::names::to_internal_name;

use super::context::CodeModel;
use super::types::{ReferenceType, TypeId, TypeKind};

#[derive(Clone, Copy)]
enum Style {
    Full,
    Binary,
    Simple,
}

impl CodeModel {
    /// Qualified name per the Java naming rules: `int`, `java.lang.String`, `java.io.File[]`.
    pub fn full_name(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_name(id, Style::Full, &mut out);
        out
    }

    /// Binary name: nested classes are joined with `$` instead of `.`.
    ///
    /// Arrays append `[]` to the element's binary name; see `descriptor` for
    /// the JVM encoding.
    pub fn binary_name(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_name(id, Style::Binary, &mut out);
        out
    }

    /// Unqualified name: `int`, `String`, `Entry[]`.
    pub fn name(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_name(id, Style::Simple, &mut out);
        out
    }

    /// JVM field descriptor: `I`, `Ljava/util/Map$Entry;`, `[[D`.
    ///
    /// Parameterized references are described by their erasure.
    pub fn descriptor(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_descriptor(id, &mut out);
        out
    }

    fn write_name(&self, id: TypeId, style: Style, out: &mut String) {
        match self.ensure_type(id) {
            TypeKind::Primitive(kind) => out.push_str(kind.name()),
            TypeKind::Array(element) => {
                self.write_name(*element, style, out);
                out.push_str("[]");
            }
            TypeKind::Reference(ReferenceType::Class {
                package,
                outer,
                name,
            }) => {
                match (style, outer) {
                    (Style::Simple, _) => {}
                    (Style::Full, Some(outer)) => {
                        self.write_name(*outer, style, out);
                        out.push('.');
                    }
                    (Style::Binary, Some(outer)) => {
                        self.write_name(*outer, style, out);
                        out.push('$');
                    }
                    (_, None) => {
                        let package = self.resolve(*package);
                        if !package.is_empty() {
                            out.push_str(package);
                            out.push('.');
                        }
                    }
                }
                out.push_str(self.resolve(*name));
            }
            TypeKind::Reference(ReferenceType::Parameterized { basis, args }) => {
                self.write_name(*basis, style, out);
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_name(*arg, style, out);
                }
                out.push('>');
            }
        }
    }

    fn write_descriptor(&self, id: TypeId, out: &mut String) {
        match self.ensure_type(id) {
            TypeKind::Primitive(kind) => out.push(kind.descriptor()),
            TypeKind::Array(element) => {
                out.push('[');
                self.write_descriptor(*element, out);
            }
            TypeKind::Reference(ReferenceType::Class { .. }) => {
                out.push('L');
                out.push_str(&to_internal_name(&self.binary_name(id)));
                out.push(';');
            }
            TypeKind::Reference(ReferenceType::Parameterized { basis, .. }) => {
                self.write_descriptor(*basis, out);
            }
        }
    }
}
