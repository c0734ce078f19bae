use crate::constants::{COMMENT_CHAR, FIELD_DELIMITER, GZIP_EXTENSION};
use crate::models::{AliasTable, CodepointSequence, Diagnostic};
use crate::types::LineNumber;
use crate::Error;
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs;
use std::io::Cursor;
use std::io::Read;
use std::path::Path;

/// The parsed mapping file, together with the lines that had to be skipped.
#[derive(Debug, Default)]
pub struct AliasLoad {
    pub aliases: AliasTable,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct AliasLoader {}

impl AliasLoader {
    /// Parses mapping text of the form `alias ; target  # comment`.
    ///
    /// Bad lines are reported as diagnostics and skipped; they never fail the load.
    pub fn read_aliases_from_string(text: &str) -> Result<AliasLoad, Error> {
        let mut load = AliasLoad::default();

        // Comments are cut before field splitting so `#` can appear after the target.
        // Only non-empty lines reach the reader, each tagged with its 1-based source line;
        // quoting is off, so every line handed over yields exactly one record.
        let numbered_lines: Vec<(LineNumber, &str)> = text
            .lines()
            .zip(1..)
            .map(|(line, number)| match line.find(COMMENT_CHAR) {
                Some(index) => (number, line[..index].trim()),
                None => (number, line.trim()),
            })
            .filter(|(_, content)| !content.is_empty())
            .collect();
        let stripped = numbered_lines
            .iter()
            .map(|(_, content)| *content)
            .collect::<Vec<&str>>()
            .join("\n");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(FIELD_DELIMITER)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(Cursor::new(stripped.as_str()));

        for (record, (line, content)) in reader.records().zip(numbered_lines.iter().copied()) {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            if record.len() != 2 {
                load.diagnostics.push(Diagnostic::MalformedLine {
                    line,
                    content: content.to_string(),
                });
                continue;
            }

            let alias_token = &record[0];
            let target_token = &record[1];

            let alias = match alias_token.parse::<CodepointSequence>() {
                Ok(alias) => alias,
                Err(e) => {
                    debug!("line {}: {}", line, e);
                    load.diagnostics.push(Diagnostic::InvalidAlias {
                        alias: alias_token.to_string(),
                    });
                    continue;
                }
            };

            let target = match target_token.parse::<CodepointSequence>() {
                Ok(target) => target,
                Err(e) => {
                    debug!("line {}: {}", line, e);
                    load.diagnostics.push(Diagnostic::InvalidTarget {
                        alias: alias_token.to_string(),
                        target: target_token.to_string(),
                    });
                    continue;
                }
            };

            if let Some(previous) = load.aliases.merge(alias.clone(), target.clone()) {
                debug!(
                    "line {}: alias {} redefined ({} -> {})",
                    line, alias, previous, target
                );
            }
        }

        Ok(load)
    }

    /// Decompress and parse a gzip-compressed mapping file.
    pub fn extract_aliases_from_bytes(read_bytes: &[u8]) -> Result<AliasLoad, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_aliases_from_string(&decompressed_data)
    }
}

/// Loads the mapping file at `path`; files ending in `.gz` are decompressed first.
pub fn load_aliases(path: &Path) -> Result<AliasLoad, Error> {
    let is_compressed = path.extension().is_some_and(|ext| ext == GZIP_EXTENSION);

    let load = if is_compressed {
        AliasLoader::extract_aliases_from_bytes(&fs::read(path)?)?
    } else {
        AliasLoader::read_aliases_from_string(&fs::read_to_string(path)?)?
    };

    info!(
        "loaded {} aliases from {} ({} lines skipped)",
        load.aliases.len(),
        path.display(),
        load.diagnostics.len()
    );

    Ok(load)
}
