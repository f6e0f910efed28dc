use crate::NameTable;

#[test]
fn same_name_same_id() {
    let mut table = NameTable::new();

    let a = table.intern("java.util");
    let b = table.intern("java.util");
    let c = table.intern("List");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.resolve(c), "List");
}

#[test]
fn get_does_not_add() {
    let mut table = NameTable::new();
    let map = table.intern("Map");

    assert_eq!(table.get("Map"), Some(map));
    assert_eq!(table.get("HashMap"), None);
    assert_eq!(table.intern("HashMap"), table.get("HashMap").unwrap());
}

#[test]
fn empty_package_is_a_name() {
    let mut table = NameTable::new();
    let default_package = table.intern("");

    assert_eq!(table.resolve(default_package), "");
}
