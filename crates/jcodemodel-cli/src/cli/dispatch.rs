//! Dispatch logic: extract params from ArgMatches and convert to command args.

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::imports::ImportsArgs;
use crate::commands::inspect::InspectArgs;

pub struct InspectParams {
    pub type_name: String,
    pub type_args: Vec<String>,
    pub dims: u8,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl InspectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_name: m
                .get_one::<String>("type_name")
                .cloned()
                .unwrap_or_default(),
            type_args: strings(m, "type_args"),
            dims: m.get_one::<u8>("dims").copied().unwrap_or(0),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<InspectParams> for InspectArgs {
    fn from(p: InspectParams) -> Self {
        Self {
            type_name: p.type_name,
            type_args: p.type_args,
            dims: p.dims,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ImportsParams {
    pub type_names: Vec<String>,
    pub package: Option<String>,
    pub implicit_java_lang: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl ImportsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_names: strings(m, "type_names"),
            package: m.get_one::<String>("package").cloned(),
            implicit_java_lang: !m.get_flag("no_implicit_java_lang"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ImportsParams> for ImportsArgs {
    fn from(p: ImportsParams) -> Self {
        Self {
            type_names: p.type_names,
            package: p.package,
            implicit_java_lang: p.implicit_java_lang,
            color: p.color.should_colorize(),
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
