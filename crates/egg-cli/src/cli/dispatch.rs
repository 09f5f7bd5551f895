//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! Run arguments may sit on the top-level command or on the subcommand
//! (`egg -v print x.egg`); values on the subcommand win, flags and counts
//! from both levels combine.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, Mode};
use crate::commands::RunArgs;

#[derive(Debug)]
pub struct RunParams {
    pub mode: Mode,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub no_norm: bool,
    pub verbosity: u8,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let (subcommand, sub) = match m.subcommand() {
            Some((name, sub)) => (Some(name), Some(sub)),
            None => (None, None),
        };
        let levels = Levels { top: m, sub };

        Self {
            mode: resolve_mode(&levels, subcommand),
            input: levels
                .value::<PathBuf>("input")
                .or_else(|| levels.value("input_path")),
            output: levels
                .value::<PathBuf>("output")
                .or_else(|| levels.value("output_path")),
            name: levels.value("name"),
            no_norm: levels.flag("no_norm"),
            verbosity: levels.count("verbose"),
            color: parse_color(levels.value::<String>("color").as_deref()),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            name: p.name,
            normalize: !p.no_norm,
            color: p.color.should_colorize(),
        }
    }
}

/// `--usage`/`--version`, then `-c`, then the subcommand, then compile.
fn resolve_mode(levels: &Levels<'_>, subcommand: Option<&str>) -> Mode {
    if levels.flag("usage") {
        return Mode::Usage;
    }
    if levels.flag("version") {
        return Mode::Version;
    }
    if let Some(mode) = levels.value::<Mode>("command") {
        return mode;
    }
    match subcommand {
        Some("print") => Mode::Print,
        Some("usage") => Mode::Usage,
        Some("version") => Mode::Version,
        _ => Mode::Compile,
    }
}

struct Levels<'a> {
    top: &'a ArgMatches,
    sub: Option<&'a ArgMatches>,
}

impl Levels<'_> {
    fn value<T: Clone + Send + Sync + 'static>(&self, id: &str) -> Option<T> {
        self.sub
            .and_then(|sub| sub.get_one::<T>(id))
            .or_else(|| self.top.get_one::<T>(id))
            .cloned()
    }

    fn flag(&self, id: &str) -> bool {
        self.top.get_flag(id) || self.sub.is_some_and(|sub| sub.get_flag(id))
    }

    fn count(&self, id: &str) -> u8 {
        let sub = self.sub.map_or(0, |sub| sub.get_count(id));
        self.top.get_count(id).saturating_add(sub)
    }
}

fn parse_color(value: Option<&str>) -> ColorChoice {
    match value {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
