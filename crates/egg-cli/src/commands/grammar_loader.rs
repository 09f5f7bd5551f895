use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use egg_compiler::{Diagnostics, normalize, parse};
use egg_core::Grammar;

use super::RunError;

/// Parse the grammar at `path` (stdin for `None` or `-`), normalizing on request.
///
/// Diagnostics come back only when they are all warnings; errors fail the load.
pub fn load_grammar(
    path: Option<&Path>,
    normalized: bool,
) -> Result<(Grammar, Diagnostics), RunError> {
    let reader = open_input(path)?;
    let (grammar, diagnostics) = parse(reader)?;
    if diagnostics.has_errors() {
        return Err(egg_compiler::Error::Invalid(diagnostics).into());
    }
    log::info!("loaded {} rules", grammar.len());

    if !normalized {
        return Ok((grammar, diagnostics));
    }
    Ok((normalize(&grammar), diagnostics))
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, RunError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|source| RunError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
