use std::io;

/// Access to input that has already been forgotten.
///
/// Carries the newline count of everything forgotten so diagnostics can
/// still name a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {requested} was forgotten (oldest available index is {available})")]
pub struct ForgottenState {
    pub requested: usize,
    pub available: usize,
    pub newlines: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Forgotten(#[from] ForgottenState),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
