use indoc::indoc;
use jcodemodel_core::Colors;
use jcodemodel_lib::{CodeModel, INT};

use super::inspect::TypeReport;
use super::type_resolver::build_type;

#[test]
fn primitive_report() {
    let model = CodeModel::new();
    let report = TypeReport::new(&model, INT);

    insta::assert_snapshot!(report.render(Colors::OFF), @r"
    kind         primitive
    full name    int
    binary name  int
    name         int
    descriptor   I
    boxed        java.lang.Integer
    unboxed      int
    erasure      int
    ");
}

#[test]
fn parameterized_array_report() {
    let mut model = CodeModel::new();
    let args = vec!["java.lang.String".to_owned()];
    let id = build_type(&mut model, "java.util.List", &args, 1).unwrap();
    let report = TypeReport::new(&model, id);

    assert_eq!(report.kind, "array");
    assert_eq!(report.full_name, "java.util.List<java.lang.String>[]");
    assert_eq!(
        report.element_type.as_deref(),
        Some("java.util.List<java.lang.String>")
    );
    assert_eq!(report.erasure, "java.util.List<java.lang.String>[]");
    assert_eq!(report.descriptor, "[Ljava/util/List;");
    assert!(report.package.is_none());
}

#[test]
fn parameterized_report_lists_arguments() {
    let mut model = CodeModel::new();
    let args = vec!["java.lang.String".to_owned(), "int".to_owned()];
    let id = build_type(&mut model, "java.util.Map", &args, 0).unwrap();
    let report = TypeReport::new(&model, id);

    assert_eq!(
        report.render(Colors::OFF),
        indoc! {"
            kind         parameterized
            full name    java.util.Map<java.lang.String,java.lang.Integer>
            binary name  java.util.Map<java.lang.String,java.lang.Integer>
            name         Map<String,Integer>
            descriptor   Ljava/util/Map;
            package      java.util
            argument     java.lang.String
            argument     java.lang.Integer
            boxed        java.util.Map<java.lang.String,java.lang.Integer>
            unboxed      java.util.Map<java.lang.String,java.lang.Integer>
            erasure      java.util.Map
        "}
    );
}

#[test]
fn json_skips_absent_fields() {
    let model = CodeModel::new();
    let report = TypeReport::new(&model, model.boxify(INT));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["kind"], "class");
    assert_eq!(json["package"], "java.lang");
    assert_eq!(json["unboxed"], "int");
    assert!(json.get("element_type").is_none());
    assert!(json.get("type_arguments").is_none());
}

#[test]
fn colored_labels_are_dimmed() {
    let model = CodeModel::new();
    let report = TypeReport::new(&model, INT);
    let out = report.render(Colors::ON);

    assert!(out.starts_with("\x1b[2mkind        \x1b[0m primitive\n"));
}
