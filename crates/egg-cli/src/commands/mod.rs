pub mod compile;
pub mod grammar_loader;
pub mod output;
pub mod print;


use std::io;
use std::path::PathBuf;

/// Configuration shared by `print` and `compile`.
#[derive(Debug, Default)]
pub struct RunArgs {
    /// `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    /// `None` or `-` writes stdout.
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub normalize: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to open `{}`: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Stdout(#[source] io::Error),

    #[error("`{0}` is not a valid parser name")]
    InvalidName(String),

    #[error(transparent)]
    Compile(#[from] egg_compiler::Error),
}

/// Print a failed run to stderr.
pub fn report(err: &RunError, color: bool) {
    match err {
        RunError::Compile(egg_compiler::Error::Syntax(e)) => {
            eprintln!("{}", e.render_colored(color).trim_end());
        }
        RunError::Compile(egg_compiler::Error::Invalid(diagnostics)) => {
            eprint!("{}", diagnostics.render_colored(color));
            eprintln!("error: {err}");
        }
        _ => eprintln!("error: {err}"),
    }
}
