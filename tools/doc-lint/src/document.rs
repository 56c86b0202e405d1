use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A text file loaded once and shared read-only by every check in a group.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
    /// `content` split on `\n`; a trailing newline yields a final empty line.
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub enum DocumentError {
    Missing(PathBuf),
    NotAFile(PathBuf),
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Missing(path) => write!(f, "{} does not exist", path.display()),
            DocumentError::NotAFile(path) => write!(f, "{} is not a regular file", path.display()),
            DocumentError::Unreadable { path, source } => {
                write!(f, "{} could not be read as UTF-8: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::Missing(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(DocumentError::NotAFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, content))
    }

    pub fn from_text(path: &Path, content: String) -> Self {
        let lines = content.split('\n').map(str::to_string).collect();
        Self {
            path: path.to_path_buf(),
            content,
            lines,
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.content.contains(needle)
    }

    /// Non-overlapping occurrences of `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.content.matches(needle).count()
    }
}
