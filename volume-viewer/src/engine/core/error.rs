use std::fmt;
use std::path::PathBuf;

use crate::engine::scene::parser::FormatError;

/// Startup failures. Every variant stops the viewer before a window opens.
#[derive(Debug)]
pub enum ViewerError {
    Format(FormatError),
    ResourceLoad { path: PathBuf, reason: String },
    Configuration(String),
}

impl ViewerError {
    pub fn resource(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ViewerError::ResourceLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Format(error) => write!(f, "scene format error: {error}"),
            ViewerError::ResourceLoad { path, reason } => {
                write!(f, "failed to load {}: {reason}", path.display())
            }
            ViewerError::Configuration(reason) => write!(f, "configuration error: {reason}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Format(error) => Some(error),
            _ => None,
        }
    }
}

impl From<FormatError> for ViewerError {
    fn from(error: FormatError) -> Self {
        ViewerError::Format(error)
    }
}
