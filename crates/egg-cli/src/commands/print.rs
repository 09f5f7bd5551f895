use super::grammar_loader::load_grammar;
use super::output::write_output;
use super::{RunArgs, RunError};

pub fn run(args: RunArgs) -> Result<(), RunError> {
    let (grammar, diagnostics) = load_grammar(args.input.as_deref(), args.normalize)?;
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(args.color));
    }
    write_output(args.output.as_deref(), &egg_compiler::print(&grammar))
}
