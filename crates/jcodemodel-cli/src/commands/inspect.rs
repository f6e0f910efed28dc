use jcodemodel_core::Colors;
use jcodemodel_lib::{CodeModel, ReferenceType, TypeId, TypeKind};
use serde::Serialize;

use super::type_resolver::build_type;

pub struct InspectArgs {
    pub type_name: String,
    pub type_args: Vec<String>,
    pub dims: u8,
    pub json: bool,
    pub color: bool,
}

/// Everything the model knows about one type.
#[derive(Debug, Serialize)]
pub struct TypeReport {
    pub kind: &'static str,
    pub full_name: String,
    pub binary_name: String,
    pub name: String,
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    pub boxed: String,
    pub unboxed: String,
    pub erasure: String,
}

impl TypeReport {
    pub fn new(model: &CodeModel, id: TypeId) -> Self {
        let kind = match model.kind(id) {
            TypeKind::Primitive(_) => "primitive",
            TypeKind::Reference(ReferenceType::Class { .. }) => "class",
            TypeKind::Reference(ReferenceType::Parameterized { .. }) => "parameterized",
            TypeKind::Array(_) => "array",
        };

        Self {
            kind,
            full_name: model.full_name(id),
            binary_name: model.binary_name(id),
            name: model.name(id),
            descriptor: model.descriptor(id),
            package: model.package_name(id).map(str::to_owned),
            type_arguments: model
                .type_arguments(id)
                .iter()
                .map(|&arg| model.full_name(arg))
                .collect(),
            element_type: model.element_type(id).ok().map(|e| model.full_name(e)),
            boxed: model.full_name(model.boxify(id)),
            unboxed: model.full_name(model.unboxify(id)),
            erasure: model.full_name(model.erasure(id)),
        }
    }

    /// Aligned `label value` lines.
    pub fn render(&self, colors: Colors) -> String {
        let mut rows: Vec<(&str, &str)> = vec![
            ("kind", self.kind),
            ("full name", &self.full_name),
            ("binary name", &self.binary_name),
            ("name", &self.name),
            ("descriptor", &self.descriptor),
        ];
        if let Some(package) = &self.package {
            rows.push(("package", package));
        }
        for arg in &self.type_arguments {
            rows.push(("argument", arg));
        }
        if let Some(element) = &self.element_type {
            rows.push(("element", element));
        }
        rows.push(("boxed", &self.boxed));
        rows.push(("unboxed", &self.unboxed));
        rows.push(("erasure", &self.erasure));

        let mut out = String::new();
        for (label, value) in rows {
            out.push_str(&format!(
                "{}{:<12}{} {}\n",
                colors.label, label, colors.reset, value
            ));
        }
        out
    }
}

pub fn run(args: InspectArgs) {
    let mut model = CodeModel::new();
    let id = match build_type(&mut model, &args.type_name, &args.type_args, args.dims) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let report = TypeReport::new(&model, id);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", report.render(Colors::new(args.color)));
}
