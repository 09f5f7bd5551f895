mod cli;
mod commands;

use cli::{Mode, RunParams, build_cli, info_text};

fn main() {
    let matches = build_cli().get_matches();
    let params = RunParams::from_matches(&matches);
    init_logging(params.verbosity);

    let color = params.color.should_colorize();
    let mode = params.mode;
    let result = match mode {
        Mode::Print => commands::print::run(params.into()),
        Mode::Compile => commands::compile::run(params.into()),
        Mode::Usage | Mode::Help | Mode::Version => {
            print!("{}", info_text(mode).unwrap_or_default());
            Ok(())
        }
    };

    if let Err(e) = result {
        commands::report(&e, color);
        std::process::exit(1);
    }
}

/// Log to stderr; `-v` raises the level from warnings up to trace.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    // Fails only if a logger is already installed.
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(&[])
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    );
}
