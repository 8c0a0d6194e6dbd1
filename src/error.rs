use thiserror::Error;

/// User-facing command failures. The `Display` text is exactly what lands in
/// the transcript as an `Error` line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("Usage: cat [filename]")]
    CatUsage,

    #[error("cat: {0}: No such file or directory")]
    NoSuchFile(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Theme '{0}' not found")]
    NotFound(String),
}

/// Failures of the preference backend. Never shown in the transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("storage read failed: {0}")]
    Read(String),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid portfolio data: {0}")]
    Parse(#[from] serde_json::Error),
}
