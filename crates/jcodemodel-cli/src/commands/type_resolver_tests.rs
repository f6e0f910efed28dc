use jcodemodel_lib::{CodeModel, Error, INT};

use super::type_resolver::{build_type, resolve_type};

#[test]
fn primitive_keyword_resolves_to_builtin() {
    let mut model = CodeModel::new();
    assert_eq!(resolve_type(&mut model, "int").unwrap(), INT);
}

#[test]
fn class_name_resolves_to_reference() {
    let mut model = CodeModel::new();
    let id = resolve_type(&mut model, "java.util.List").unwrap();
    assert!(model.is_reference(id));
    assert_eq!(model.full_name(id), "java.util.List");
}

#[test]
fn invalid_name_keeps_context() {
    let mut model = CodeModel::new();
    let err = resolve_type(&mut model, "com..Foo").unwrap_err();
    assert_eq!(err.name, "com..Foo");
    assert_eq!(err.source, Error::InvalidClassName("com..Foo".into()));
}

#[test]
fn builds_parameterized_array() {
    let mut model = CodeModel::new();
    let args = vec!["java.lang.String".to_owned(), "long".to_owned()];
    let id = build_type(&mut model, "java.util.Map", &args, 1).unwrap();
    assert_eq!(
        model.full_name(id),
        "java.util.Map<java.lang.String,java.lang.Long>[]"
    );
}

#[test]
fn dims_wrap_primitives() {
    let mut model = CodeModel::new();
    let id = build_type(&mut model, "int", &[], 2).unwrap();
    assert_eq!(model.descriptor(id), "[[I");
}

#[test]
fn void_array_is_rejected() {
    let mut model = CodeModel::new();
    let err = build_type(&mut model, "void", &[], 1).unwrap_err();
    assert_eq!(err.source, Error::UnsupportedArrayOfVoid);
    assert_eq!(err.to_string(), "void: void has no array type");
}

#[test]
fn void_argument_is_rejected() {
    let mut model = CodeModel::new();
    let args = vec!["void".to_owned()];
    let err = build_type(&mut model, "java.util.List", &args, 0).unwrap_err();
    assert_eq!(err.source, Error::VoidTypeArgument);
}
