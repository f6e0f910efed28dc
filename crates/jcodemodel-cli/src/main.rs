mod cli;
mod commands;
mod logging;

use cli::{ImportsParams, InspectParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("inspect", m)) => {
            let params = InspectParams::from_matches(m);
            logging::init(params.verbose);
            commands::inspect::run(params.into());
        }
        Some(("imports", m)) => {
            let params = ImportsParams::from_matches(m);
            logging::init(params.verbose);
            commands::imports::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
