use std::fmt;
use std::io;

/// Custom error types for the site renderer
#[derive(Debug)]
pub enum SiteError {
    Io(io::Error),
    FrontmatterError(String),
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(e) => write!(f, "I/O error: {}", e),
            SiteError::FrontmatterError(e) => write!(f, "Frontmatter error: {}", e),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Io(e) => Some(e),
            _ => None,
        }
    }
}
