//! Command builders for the CLI.
//!
//! `print` and `compile` show the run arguments; `usage` and `version`
//! accept them hidden so any invocation can switch commands with `-c`.

use clap::{Arg, Command};

use super::args::*;

fn run_args() -> [Arg; 11] {
    [
        input_path_arg(),
        output_path_arg(),
        input_arg(),
        output_arg(),
        command_arg(),
        name_arg(),
        no_norm_arg(),
        usage_arg(),
        version_arg(),
        verbose_arg(),
        color_arg(),
    ]
}

fn with_run_args(cmd: Command) -> Command {
    cmd.args(run_args())
}

fn with_hidden_run_args(cmd: Command) -> Command {
    cmd.args(run_args().map(|arg| arg.hide(true)))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    let cmd = Command::new("egg")
        .about("Parsing expression grammar to Rust parser generator")
        .disable_version_flag(true)
        .override_usage(
            "\
  egg [COMMAND] [OPTIONS] [INPUT [OUTPUT]]
  egg [COMMAND] -i <FILE> -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  egg calc.egg calc.rs           # generate `pub mod calc` in calc.rs
  egg print calc.egg             # normalized grammar to stdout
  egg print --no-norm < calc.egg # grammar as parsed
  egg -n expr -o out.rs calc.egg # explicit module name"#,
        )
        .subcommand(print_command())
        .subcommand(compile_command())
        .subcommand(usage_command())
        .subcommand(version_command());
    with_run_args(cmd)
}

/// Print the grammar back as source.
pub fn print_command() -> Command {
    let cmd = Command::new("print")
        .about("Print the (normalized) grammar")
        .override_usage("  egg print [OPTIONS] [INPUT [OUTPUT]]")
        .after_help(
            r#"EXAMPLES:
  egg print calc.egg             # normalized grammar
  egg print --no-norm calc.egg   # as parsed"#,
        );
    with_run_args(cmd)
}

/// Generate a Rust parser.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Generate a Rust parser (default)")
        .override_usage("  egg compile [OPTIONS] [INPUT [OUTPUT]]")
        .after_help(
            r#"EXAMPLES:
  egg compile calc.egg calc.rs   # module `calc`
  egg compile -n p < calc.egg    # module `p` on stdout
  egg compile -n '' calc.egg     # no module wrapper"#,
        );
    with_run_args(cmd)
}

pub fn usage_command() -> Command {
    with_hidden_run_args(Command::new("usage").about("Print usage"))
}

pub fn version_command() -> Command {
    with_hidden_run_args(Command::new("version").about("Print version"))
}
