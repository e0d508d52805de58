//! CLI definition and dispatch params.
//!
//! Shared arg builders feed the subcommands; `*Params` structs pull typed
//! values back out of `ArgMatches` and convert into command args.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::commands::dump::DumpArgs;
use crate::commands::info::InfoArgs;

/// Compiled IR file (positional).
fn ir_path_arg() -> Arg {
    Arg::new("ir_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Compiled schema IR file")
}

/// JSON output (--json).
fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Emit the decoded IR as JSON")
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("flydec")
        .about("Inspect compiled schema IR files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(info_command())
        .subcommand(dump_command())
}

/// Summarize an IR file: frame identity plus message listing.
fn info_command() -> Command {
    Command::new("info")
        .about("Show IR frame identity and message summary")
        .arg(ir_path_arg())
}

/// Print every decoded token.
fn dump_command() -> Command {
    Command::new("dump")
        .about("Print all decoded tokens")
        .arg(ir_path_arg())
        .arg(json_arg())
}

pub struct InfoParams {
    pub ir_path: PathBuf,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ir_path: m.get_one::<PathBuf>("ir_path").cloned().expect("required"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self { ir_path: p.ir_path }
    }
}

pub struct DumpParams {
    pub ir_path: PathBuf,
    pub json: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ir_path: m.get_one::<PathBuf>("ir_path").cloned().expect("required"),
            json: m.get_flag("json"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            ir_path: p.ir_path,
            json: p.json,
        }
    }
}
