//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jcodemodel")
        .about("Inspect Java types and import listings as a code generator sees them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(inspect_command())
        .subcommand(imports_command())
}

/// Show names and conversions of one type.
pub fn inspect_command() -> Command {
    Command::new("inspect")
        .about("Show names, boxing and erasure of a type")
        .after_help(
            r#"EXAMPLES:
  jcodemodel inspect int
  jcodemodel inspect int --dims 2
  jcodemodel inspect java.util.Map --arg java.lang.String --arg long
  jcodemodel inspect java.lang.Integer --json"#,
        )
        .arg(type_name_arg())
        .arg(type_arg_arg())
        .arg(dims_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Print the sorted import block for a set of types.
pub fn imports_command() -> Command {
    Command::new("imports")
        .about("Print sorted import statements for the given types")
        .after_help(
            r#"EXAMPLES:
  jcodemodel imports java.util.List com.acme.Foo javax.inject.Inject
  jcodemodel imports java.lang.String --no-implicit-java-lang
  jcodemodel imports com.acme.gen.Model com.acme.Foo -p com.acme.gen"#,
        )
        .arg(type_names_arg())
        .arg(package_arg())
        .arg(no_implicit_java_lang_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
