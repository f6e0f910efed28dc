use jcodemodel_lib::{CodeModel, ImportConfig, ImportSet};

use super::type_resolver::resolve_type;

pub struct ImportsArgs {
    pub type_names: Vec<String>,
    pub package: Option<String>,
    pub implicit_java_lang: bool,
    pub color: bool,
}

pub fn run(args: ImportsArgs) {
    let mut model = CodeModel::new();
    let mut set = ImportSet::new();

    for name in &args.type_names {
        match resolve_type(&mut model, name) {
            Ok(id) => set.add(&model, id),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let mut config = ImportConfig::new()
        .implicit_java_lang(args.implicit_java_lang)
        .colored(args.color);
    if let Some(package) = args.package {
        config = config.package(package);
    }

    tracing::debug!(
        requested = args.type_names.len(),
        collected = set.len(),
        "rendering imports"
    );
    print!("{}", set.render(&model, &config));
}
