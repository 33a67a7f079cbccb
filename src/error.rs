use std::io;

use thiserror::Error;

/// Failures surfaced while driving visitors over a school.
///
/// Visiting an element a visitor does not recognise is never an error; the
/// only failures come from the console the visitors report to.
#[derive(Debug, Error)]
pub enum VisitError {
    #[error("failed to write visitor output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to read acknowledgement from input: {0}")]
    Input(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, VisitError>;
