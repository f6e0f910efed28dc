//! Lexical helpers for Java names.

/// Whether `s` is a single Java identifier.
///
/// Letters (any script), `_` and `$` may start an identifier; digits may
/// follow. Keywords are not rejected here.
///
/// # Examples
/// ```
/// use jcodemodel_core::names::is_identifier;
/// assert!(is_identifier("Map"));
/// assert!(is_identifier("Outer$1"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier("java.util"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Whether `s` is a dotted sequence of identifiers, e.g. `java.util.Map`.
pub fn is_qualified_name(s: &str) -> bool {
    s.split('.').all(is_identifier)
}

/// Split a dotted name into its qualifier and last segment.
///
/// # Examples
/// ```
/// use jcodemodel_core::names::split_qualified;
/// assert_eq!(split_qualified("java.util.Map"), ("java.util", "Map"));
/// assert_eq!(split_qualified("Foo"), ("", "Foo"));
/// ```
pub fn split_qualified(s: &str) -> (&str, &str) {
    match s.rsplit_once('.') {
        Some((qualifier, last)) => (qualifier, last),
        None => ("", s),
    }
}

/// Convert a binary name to the JVM internal form (`java/util/Map$Entry`).
pub fn to_internal_name(binary_name: &str) -> String {
    binary_name.replace('.', "/")
}
