//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction, value_parser};

/// Type name (positional): a primitive keyword or a dotted class name.
pub fn type_name_arg() -> Arg {
    Arg::new("type_name")
        .value_name("NAME")
        .required(true)
        .help("Primitive keyword or fully qualified class name")
}

/// Type names (positional, one or more).
pub fn type_names_arg() -> Arg {
    Arg::new("type_names")
        .value_name("NAME")
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append)
        .help("Primitive keywords or fully qualified class names")
}

/// Type argument (--arg, repeatable).
pub fn type_arg_arg() -> Arg {
    Arg::new("type_args")
        .long("arg")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Type argument applied to the class (repeatable)")
}

/// Array dimensions (--dims).
pub fn dims_arg() -> Arg {
    Arg::new("dims")
        .long("dims")
        .value_name("N")
        .default_value("0")
        .value_parser(value_parser!(u8))
        .help("Wrap the type in N array dimensions")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the report as JSON")
}

/// Package of the generated compilation unit (--package).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .long("package")
        .short('p')
        .value_name("PACKAGE")
        .help("Package of the compilation unit (its classes need no import)")
}

/// List java.lang classes too (--no-implicit-java-lang).
pub fn no_implicit_java_lang_arg() -> Arg {
    Arg::new("no_implicit_java_lang")
        .long("no-implicit-java-lang")
        .action(ArgAction::SetTrue)
        .help("Also list java.lang classes")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
