use std::cmp::Ordering;

use super::*;
use crate::Error;

#[test]
fn view_queries_match_model() {
    let mut model = CodeModel::new();
    let map = model.reference("java.util.Map").unwrap();
    let entry = model.nested(map, "Entry").unwrap();

    let view = model.view(entry);

    assert_eq!(view.id(), entry);
    assert_eq!(view.full_name(), "java.util.Map.Entry");
    assert_eq!(view.binary_name(), "java.util.Map$Entry");
    assert_eq!(view.name(), "Entry");
    assert_eq!(view.descriptor(), "Ljava/util/Map$Entry;");
    assert!(view.is_reference());
    assert!(!view.is_primitive());
    assert!(!view.is_array());
    assert_eq!(view.as_primitive(), None);
}

#[test]
fn owner_is_the_issuing_model() {
    let model = CodeModel::new();
    let view = model.view(INT);

    assert!(std::ptr::eq(view.owner(), &model));
}

#[test]
fn conversions_stay_in_model() {
    let mut model = CodeModel::new();
    let ints = model.array(INT).unwrap();
    let list = model.reference("java.util.List").unwrap();
    let longs = model.narrow(list, &[LONG]).unwrap();

    let int = model.view(INT);
    assert_eq!(int.boxify().full_name(), "java.lang.Integer");
    assert_eq!(int.boxify().unboxify(), int);
    assert_eq!(int.unboxify(), int);

    assert_eq!(model.view(ints).element_type(), Ok(int));
    assert_eq!(
        int.element_type(),
        Err(Error::NotAnArrayType("int".to_string()))
    );
    assert_eq!(model.view(longs).erasure().id(), list);
}

#[test]
fn equality_requires_same_model() {
    let a = CodeModel::new();
    let b = CodeModel::new();

    assert_eq!(a.view(INT), a.view(INT));
    assert_ne!(a.view(INT), b.view(INT));
    assert_ne!(a.view(INT), a.view(LONG));
}

#[test]
fn display_and_debug() {
    let mut model = CodeModel::new();
    let string = model.reference("java.lang.String").unwrap();
    let strings = model.array(string).unwrap();

    assert_eq!(model.view(string).to_string(), "java.lang.String");
    assert_eq!(format!("{:?}", model.view(INT)), "Primitive(int)");
    assert_eq!(
        format!("{:?}", model.view(string)),
        "Reference(java.lang.String)"
    );
    assert_eq!(
        format!("{:?}", model.view(strings)),
        "Array(java.lang.String[])"
    );
}

#[test]
fn view_compare() {
    let mut model = CodeModel::new();
    let list = model.reference("java.util.List").unwrap();
    let foo = model.reference("com.acme.Foo").unwrap();

    assert_eq!(model.view(list).compare(&model.view(foo)), Ordering::Less);
    assert_eq!(model.view(foo).compare(&model.view(list)), Ordering::Greater);
}
