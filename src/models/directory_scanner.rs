use crate::models::{CodepointSequence, Diagnostic, FileNaming};
use crate::types::FileName;
use crate::Error;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Existing emoji files keyed by the code point sequence in their name.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    files: BTreeMap<CodepointSequence, FileName>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DirectoryScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `sequence -> file_name`. When another file already claimed the
    /// sequence, the new name wins and the collision is reported.
    pub fn merge(&mut self, sequence: CodepointSequence, file_name: FileName) {
        if let Some(dropped) = self.files.get(&sequence) {
            if *dropped != file_name {
                self.diagnostics.push(Diagnostic::DuplicateSequence {
                    sequence: sequence.clone(),
                    kept: file_name.clone(),
                    dropped: dropped.clone(),
                });
            }
        }
        self.files.insert(sequence, file_name);
    }

    pub fn file_name(&self, sequence: &CodepointSequence) -> Option<&FileName> {
        self.files.get(sequence)
    }

    pub fn contains(&self, sequence: &CodepointSequence) -> bool {
        self.files.contains_key(sequence)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Lists the files in `dir` matching `{prefix}*.{ext}` (non-recursive).
///
/// Matching names are visited in byte order, so collisions always resolve the
/// same way regardless of the platform's listing order. Names whose middle part
/// is not a code point sequence are skipped with a diagnostic.
pub fn scan_directory(dir: &Path, naming: &FileNaming) -> Result<DirectoryScan, Error> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut file_names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(file_name) => {
                if naming.sequence_part(&file_name).is_some() {
                    file_names.push(file_name);
                }
            }
            Err(os_name) => {
                debug!("ignoring non UTF-8 file name {:?}", os_name);
            }
        }
    }
    file_names.sort();

    let mut scan = DirectoryScan::new();
    for file_name in file_names {
        let Some(sequence_part) = naming.sequence_part(&file_name) else {
            continue;
        };

        match sequence_part.parse::<CodepointSequence>() {
            Ok(sequence) => scan.merge(sequence, file_name),
            Err(e) => {
                debug!("{}: {}", file_name, e);
                scan.diagnostics.push(Diagnostic::UnparsableFileName { file_name });
            }
        }
    }

    info!("found {} {} files in {}", scan.len(), naming.ext, dir.display());

    Ok(scan)
}
