use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::RunError;

/// Write `text` to `path`, or stdout for `None` or `-`.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), RunError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(path, text).map_err(|source| RunError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(RunError::Stdout)
        }
    }
}
