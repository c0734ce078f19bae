use crate::models::CodepointSequence;
use crate::types::FileName;
use crate::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File extensions the tool accepts.
///
/// `Sgv` is carried over verbatim from the upstream option set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileExtension {
    Ai,
    Png,
    Sgv,
}

impl FileExtension {
    pub const ALL: [FileExtension; 3] =
        [FileExtension::Ai, FileExtension::Png, FileExtension::Sgv];

    pub const fn as_str(self) -> &'static str {
        match self {
            FileExtension::Ai => "ai",
            FileExtension::Png => "png",
            FileExtension::Sgv => "sgv",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.as_str() == s)
            .ok_or_else(|| Error::ParserError(format!("unsupported file extension '{}'", s)))
    }
}

/// How code point sequences map to file names: `{prefix}{sequence}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    pub prefix: String,
    pub ext: FileExtension,
}

impl FileNaming {
    pub fn new(prefix: impl Into<String>, ext: FileExtension) -> Self {
        Self {
            prefix: prefix.into(),
            ext,
        }
    }

    pub fn file_name(&self, sequence: &CodepointSequence) -> FileName {
        format!("{}{}.{}", self.prefix, sequence, self.ext)
    }

    /// Returns the text between the prefix and the `.{ext}` suffix, or `None`
    /// if `file_name` does not match `{prefix}*.{ext}`.
    ///
    /// With an empty prefix, dot-files are not matched (same as a shell glob).
    pub fn sequence_part<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() && file_name.starts_with('.') {
            return None;
        }

        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.ext.as_str())?
            .strip_suffix('.')
    }
}

/// Everything a single aliasing run needs.
#[derive(Debug, Clone)]
pub struct AliasConfig {
    pub filedir: PathBuf,
    pub aliases_path: PathBuf,
    pub naming: FileNaming,
    pub replace: bool,
    pub dry_run: bool,
}
