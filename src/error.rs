//! Error type for the conversion pipeline.

use std::fmt;
use std::path::PathBuf;

/// Errors that abort a conversion.
///
/// Missing or malformed record fields are never reported here; they fall back
/// to the column defaults instead.
#[derive(Debug)]
pub enum ConvertError {
    /// Wrong number of positional arguments or an invalid flag
    Usage(String),
    /// The input path does not resolve to a file
    NotFound(PathBuf),
    /// The input is not well-formed JSON
    Decode(serde_json::Error),
    /// Well-formed JSON that is not shaped like an export document
    InvalidDocument(String),
    /// Any other read or write failure
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Attach a path to an I/O error, promoting `NotFound` to its own variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ConvertError::NotFound(path)
        } else {
            ConvertError::Io { path, source }
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Usage(msg) => write!(f, "{}", msg),
            ConvertError::NotFound(path) => write!(f, "File {} not found", path.display()),
            ConvertError::Decode(e) => write!(f, "JSON error: {}", e),
            ConvertError::InvalidDocument(msg) => write!(f, "Invalid export document: {}", msg),
            ConvertError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Decode(e) => Some(e),
            ConvertError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => ConvertError::InvalidDocument(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => ConvertError::Decode(err),
        }
    }
}
