use crate::names::{is_identifier, is_qualified_name, split_qualified, to_internal_name};

#[test]
fn identifiers() {
    assert!(is_identifier("x"));
    assert!(is_identifier("_x"));
    assert!(is_identifier("$proxy"));
    assert!(is_identifier("Über"));
    assert!(is_identifier("List2"));
}

#[test]
fn non_identifiers() {
    assert!(!is_identifier(""));
    assert!(!is_identifier("2x"));
    assert!(!is_identifier("a-b"));
    assert!(!is_identifier("a b"));
    assert!(!is_identifier("List<String>"));
    assert!(!is_identifier("int[]"));
}

#[test]
fn qualified_names() {
    assert!(is_qualified_name("java.lang.String"));
    assert!(is_qualified_name("Foo"));
    assert!(!is_qualified_name("java..String"));
    assert!(!is_qualified_name(".String"));
    assert!(!is_qualified_name("java.lang."));
    assert!(!is_qualified_name(""));
}

#[test]
fn split() {
    assert_eq!(split_qualified("a.b.C"), ("a.b", "C"));
    assert_eq!(split_qualified("C"), ("", "C"));
}

#[test]
fn internal_name() {
    assert_eq!(to_internal_name("java.util.Map$Entry"), "java/util/Map$Entry");
    assert_eq!(to_internal_name("Foo"), "Foo");
}
