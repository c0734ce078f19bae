use crate::models::CodepointSequence;
use crate::types::{FileName, LineNumber};
use std::fmt;

/// A recoverable anomaly found while loading, scanning or planning.
///
/// Diagnostics never abort a run. They are collected in order, and each stage's
/// diagnostics are written to the diagnostic stream as soon as that stage
/// finishes; the `Display` form is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MalformedLine {
        line: LineNumber,
        content: String,
    },
    InvalidAlias {
        alias: String,
    },
    InvalidTarget {
        alias: String,
        target: String,
    },
    ScanFailed {
        message: String,
    },
    UnparsableFileName {
        file_name: FileName,
    },
    DuplicateSequence {
        sequence: CodepointSequence,
        kept: FileName,
        dropped: FileName,
    },
    MissingTarget {
        alias: CodepointSequence,
        target: CodepointSequence,
    },
    AliasExists {
        alias: CodepointSequence,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedLine { line, content } => {
                write!(f, "malformed line {}: {}", line, content)
            }
            Diagnostic::InvalidAlias { alias } => write!(f, "cannot parse alias {}", alias),
            Diagnostic::InvalidTarget { alias, target } => {
                write!(f, "cannot process alias {} -> {}", alias, target)
            }
            Diagnostic::ScanFailed { message } => f.write_str(message),
            Diagnostic::UnparsableFileName { file_name } => {
                write!(f, "skipping {}: not a code point sequence", file_name)
            }
            Diagnostic::DuplicateSequence {
                sequence,
                kept,
                dropped,
            } => write!(f, "{} and {} both map to {}", kept, dropped, sequence),
            Diagnostic::MissingTarget { alias, target } => {
                write!(f, "target {} for {} does not exist", target, alias)
            }
            Diagnostic::AliasExists { alias } => write!(f, "alias {} exists", alias),
        }
    }
}
