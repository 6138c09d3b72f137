use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LoadError {
    /// The result document does not exist at the given path
    InputNotFound { path: PathBuf },

    /// The result document exists but could not be read
    Io { path: PathBuf, source: std::io::Error },

    /// The result document is not well-formed XML
    Xml { path: PathBuf, source: roxmltree::Error },

    /// A required element is missing (e.g. statistics/total/stat)
    MissingNode { node: &'static str },

    /// A statistics attribute was present but not a valid integer
    BadCount { attribute: &'static str, value: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InputNotFound { path } => {
                write!(f, "Results file not found: {}", path.display())
            }
            LoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            LoadError::Xml { path, source } => {
                write!(f, "Malformed XML in {}: {}", path.display(), source)
            }
            LoadError::MissingNode { node } => {
                write!(f, "Result document is missing required element: {}", node)
            }
            LoadError::BadCount { attribute, value } => {
                write!(f, "Statistics attribute '{}' is not a number: '{}'", attribute, value)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Xml { source, .. } => Some(source),
            _ => None,
        }
    }
}
