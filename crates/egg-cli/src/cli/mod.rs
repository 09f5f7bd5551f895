mod args;
mod commands;
mod dispatch;


use clap::ValueEnum;

pub use commands::build_cli;
pub use dispatch::RunParams;

/// What a run does, chosen by subcommand, `-c`, or `--usage`/`--version`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print the grammar back as source.
    Print,
    /// Generate a Rust parser.
    #[default]
    Compile,
    /// Show usage.
    Usage,
    /// Show the full help.
    Help,
    /// Show the version.
    Version,
}

/// Text printed by the informational modes; `None` for modes that run a command.
pub fn info_text(mode: Mode) -> Option<String> {
    match mode {
        Mode::Usage => Some(format!("{}\n", build_cli().render_usage())),
        Mode::Help => Some(build_cli().render_help().to_string()),
        Mode::Version => Some(format!("Egg version {}\n", env!("CARGO_PKG_VERSION"))),
        Mode::Print | Mode::Compile => None,
    }
}

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Reports go to stderr.
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}
