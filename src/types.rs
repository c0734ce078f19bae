// Types listed here are either shared across multiple files and/or exposed via the library.

/// A single Unicode code point, as it appears in an emoji file name.
pub type Codepoint = u32;

/// The bare name of a file inside the emoji directory (no directory component).
pub type FileName = String;

/// A 1-based line number within the alias mapping file.
pub type LineNumber = u64;
