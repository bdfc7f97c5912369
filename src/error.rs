// Core error taxonomy
// Every error is scoped to one read view; a failing view never aborts
// sibling views in the same render pass, and nothing here is fatal.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Unknown identifier or slug - rendered as a "not found" state
    NotFound { kind: &'static str, id: String },

    /// Malformed plan data (mismatched row lengths, bad month axis)
    Validation(String),

    /// Plan formula references an assumption absent from the assumption set
    MissingAssumption(String),

    /// More comparison targets selected than the view allows
    SelectionLimitExceeded { selected: usize, max: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::NotFound { kind, id } => {
                write!(f, "{} not found: {}", kind, id)
            }
            CoreError::Validation(msg) => write!(f, "invalid plan data: {}", msg),
            CoreError::MissingAssumption(name) => {
                write!(f, "plan references undefined assumption: {}", name)
            }
            CoreError::SelectionLimitExceeded { selected, max } => {
                write!(f, "selected {} companies for comparison, limit is {}", selected, max)
            }
        }
    }
}

impl std::error::Error for CoreError {}

pub type CoreResult<T> = Result<T, CoreError>;
