use indoc::indoc;

use super::*;
use crate::model::{INT, LONG, VOID};

fn set_of(model: &mut CodeModel, names: &[&str]) -> ImportSet {
    let mut set = ImportSet::new();
    for name in names {
        let id = model.reference(name).unwrap();
        set.add(model, id);
    }
    set
}

#[test]
fn primitives_are_never_imported() {
    let mut model = CodeModel::new();
    let ints = model.array(INT).unwrap();

    let mut set = ImportSet::new();
    set.extend(&model, [INT, VOID, ints]);

    assert!(set.is_empty());
}

#[test]
fn duplicates_collapse() {
    let mut model = CodeModel::new();
    let mut set = set_of(&mut model, &["java.util.List", "java.util.List"]);
    let list = model.lookup("java.util.List").unwrap();
    let lists = model.array(list).unwrap();
    set.add(&model, lists);

    assert_eq!(set.len(), 1);
    assert!(set.contains(list));
}

#[test]
fn components_are_collected() {
    let mut model = CodeModel::new();
    let map = model.reference("java.util.Map").unwrap();
    let entry = model.nested(map, "Entry").unwrap();
    let file = model.reference("java.io.File").unwrap();
    let foo = model.reference("com.acme.Foo").unwrap();
    let files = model.array(file).unwrap();
    let entries = model.narrow(entry, &[foo, files]).unwrap();
    let matrix = {
        let row = model.array(entries).unwrap();
        model.array(row).unwrap()
    };

    let mut set = ImportSet::new();
    set.add(&model, matrix);

    let collected: Vec<_> = set.iter().collect();
    assert_eq!(collected, vec![map, foo, file]);
}

#[test]
fn sorted_skips_implicit_packages() {
    let mut model = CodeModel::new();
    let set = set_of(
        &mut model,
        &[
            "Local",
            "java.lang.String",
            "com.acme.Foo",
            "com.acme.gen.Sibling",
            "java.util.List",
        ],
    );
    let config = Config::new().package("com.acme.gen");

    let sorted: Vec<_> = set
        .sorted(&model, &config)
        .into_iter()
        .map(|id| model.full_name(id))
        .collect();

    assert_eq!(sorted, vec!["java.util.List", "com.acme.Foo"]);
}

#[test]
fn java_lang_can_be_listed() {
    let mut model = CodeModel::new();
    let mut set = set_of(&mut model, &["java.util.List"]);
    set.add(&model, model.boxify(LONG));

    let config = Config::new().implicit_java_lang(false);
    let sorted: Vec<_> = set
        .sorted(&model, &config)
        .into_iter()
        .map(|id| model.full_name(id))
        .collect();

    assert_eq!(sorted, vec!["java.lang.Long", "java.util.List"]);
}

#[test]
fn render_groups_java_first() {
    let mut model = CodeModel::new();
    let set = set_of(
        &mut model,
        &[
            "org.junit.Test",
            "java.util.List",
            "com.acme.Foo",
            "javax.inject.Inject",
            "java.io.File",
        ],
    );

    let out = set.render(&model, &Config::new());

    insta::assert_snapshot!(out, @r"
    import java.io.File;
    import java.util.List;
    import javax.inject.Inject;

    import com.acme.Foo;
    import org.junit.Test;
    ");
}

#[test]
fn render_single_group() {
    let mut model = CodeModel::new();
    let set = set_of(&mut model, &["org.b.B", "com.a.A"]);

    let out = set.render(&model, &Config::new());

    assert_eq!(
        out,
        indoc! {"
            import com.a.A;
            import org.b.B;
        "}
    );
}

#[test]
fn render_empty() {
    let mut model = CodeModel::new();
    let set = set_of(&mut model, &["java.lang.String"]);

    assert_eq!(set.render(&model, &Config::new()), "");
}

#[test]
fn render_colored() {
    let mut model = CodeModel::new();
    let set = set_of(&mut model, &["com.a.A"]);

    let out = set.render(&model, &Config::new().colored(true));

    assert_eq!(
        out,
        "\x1b[34mimport\x1b[0m \x1b[32mcom.a.A\x1b[0m\x1b[2m;\x1b[0m\n"
    );
}
