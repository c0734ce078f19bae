use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    NotADirectory(PathBuf),
    RemoveFailed {
        file_name: String,
        source: io::Error,
    },
    SymlinkFailed {
        alias_name: String,
        target_name: String,
        source: io::Error,
    },
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::NotADirectory(path) => write!(f, "{} is not a directory", path.display()),
            Error::RemoveFailed { file_name, source } => {
                write!(f, "failed to remove {}: {}", file_name, source)
            }
            Error::SymlinkFailed {
                alias_name,
                target_name,
                source,
            } => write!(
                f,
                "failed to create {} -> {}: {}",
                alias_name, target_name, source
            ),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::RemoveFailed { source, .. } | Error::SymlinkFailed { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            Error::ParserError(_) | Error::NotADirectory(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}
