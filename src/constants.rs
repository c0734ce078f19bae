use crate::models::FileExtension;

pub const DEFAULT_PREFIX: &str = "emoji_u";

pub const DEFAULT_FILE_EXTENSION: FileExtension = FileExtension::Png;

/// Looked up next to the executable when no mapping file is given.
pub const DEFAULT_ALIASES_FILE_NAME: &str = "emoji_aliases.txt";

pub const GZIP_EXTENSION: &str = "gz";

pub const COMMENT_CHAR: char = '#';

pub const FIELD_DELIMITER: u8 = b';';
