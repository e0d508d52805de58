mod cli;
mod commands;


use cli::{DumpParams, InfoParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
