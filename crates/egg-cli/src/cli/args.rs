//! Shared argument builders.
//!
//! The top-level command and every subcommand take the same arguments, so
//! each is defined once here.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::Mode;

/// Grammar file (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file (default: stdin)")
}

/// Output file (positional, after INPUT).
pub fn output_path_arg() -> Arg {
    Arg::new("output_path")
        .value_name("OUTPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Output file (default: stdout)")
}

/// Grammar file (-i/--input), takes precedence over INPUT.
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file; `-` for stdin")
}

/// Output file (-o/--output), takes precedence over OUTPUT.
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Output file; `-` for stdout")
}

/// Command override (-c/--command).
pub fn command_arg() -> Arg {
    Arg::new("command")
        .short('c')
        .long("command")
        .value_name("CMD")
        .value_parser(value_parser!(Mode))
        .help("Command to run, overriding the subcommand")
}

/// Parser name (-n/--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .help("Parser module name (default: derived from the output or input file name)")
}

/// Skip normalization (--no-norm).
pub fn no_norm_arg() -> Arg {
    Arg::new("no_norm")
        .long("no-norm")
        .action(ArgAction::SetTrue)
        .help("Don't normalize the grammar before printing or compiling")
}

/// Print usage (--usage).
pub fn usage_arg() -> Arg {
    Arg::new("usage")
        .long("usage")
        .action(ArgAction::SetTrue)
        .help("Print usage and exit")
}

/// Print the version (--version).
pub fn version_arg() -> Arg {
    Arg::new("version")
        .long("version")
        .action(ArgAction::SetTrue)
        .help("Print version and exit")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log more (-v info, -vv debug, -vvv trace)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .value_parser(["auto", "always", "never"])
        .help("Colorize error reports (default: auto)")
}
