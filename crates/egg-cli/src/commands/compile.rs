use std::path::Path;

use egg_core::utils::{identifier_prefix, is_identifier};

use super::grammar_loader::load_grammar;
use super::output::write_output;
use super::{RunArgs, RunError};

pub fn run(args: RunArgs) -> Result<(), RunError> {
    let name = parser_name(
        args.name.as_deref(),
        args.output.as_deref(),
        args.input.as_deref(),
    )?;
    let (grammar, mut diagnostics) = load_grammar(args.input.as_deref(), args.normalize)?;
    let (code, warnings) = egg_compiler::compile(&grammar, &name)?;
    diagnostics.extend(warnings);
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(args.color));
    }
    write_output(args.output.as_deref(), &code)
}

/// Module name for the generated parser.
///
/// An explicit name wins (empty means no module); otherwise the identifier
/// prefix of the output file stem, then of the input file stem.
pub fn parser_name(
    name: Option<&str>,
    output: Option<&Path>,
    input: Option<&Path>,
) -> Result<String, RunError> {
    if let Some(name) = name {
        if !name.is_empty() && !is_identifier(name) {
            return Err(RunError::InvalidName(name.to_string()));
        }
        return Ok(name.to_string());
    }

    let derived = [output, input]
        .into_iter()
        .flatten()
        .filter(|path| path.as_os_str() != "-")
        .filter_map(|path| path.file_stem()?.to_str())
        .map(identifier_prefix)
        .find(|prefix| !prefix.is_empty())
        .unwrap_or_default();
    Ok(derived.to_string())
}
