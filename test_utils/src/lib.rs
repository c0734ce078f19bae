use emoji_aliases::{plan_and_execute, AliasConfig, AliasReport, Error, FileExtension, FileNaming};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ALIASES_FILE_NAME: &str = "emoji_aliases.txt";

/// A throwaway emoji directory plus a mapping file, both living in one temp dir.
///
/// The emoji files are created inside `<tmp>/emoji`, the mapping file at
/// `<tmp>/emoji_aliases.txt`.
pub struct EmojiFixture {
    root: TempDir,
    pub naming: FileNaming,
}

/// Output of a single run through `plan_and_execute`.
pub struct RunOutput {
    pub result: Result<AliasReport, Error>,
    pub stdout: String,
    pub stderr: String,
}

impl EmojiFixture {
    pub fn new() -> Self {
        Self::with_naming(FileNaming::new("emoji_u", FileExtension::Png))
    }

    pub fn with_naming(naming: FileNaming) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(root.path().join("emoji")).expect("Failed to create emoji dir");
        Self { root, naming }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn filedir(&self) -> PathBuf {
        self.root.path().join("emoji")
    }

    pub fn aliases_path(&self) -> PathBuf {
        self.root.path().join(ALIASES_FILE_NAME)
    }

    pub fn write_aliases(&self, text: &str) -> &Self {
        fs::write(self.aliases_path(), text).expect("Failed to write aliases file");
        self
    }

    /// Creates empty regular files with the given names.
    pub fn touch(&self, file_names: &[&str]) -> &Self {
        for name in file_names {
            File::create(self.filedir().join(name)).expect("Failed to create file");
        }
        self
    }

    pub fn config(&self, replace: bool, dry_run: bool) -> AliasConfig {
        AliasConfig {
            filedir: self.filedir(),
            aliases_path: self.aliases_path(),
            naming: self.naming.clone(),
            replace,
            dry_run,
        }
    }

    pub fn run(&self, replace: bool, dry_run: bool) -> RunOutput {
        self.run_with_config(&self.config(replace, dry_run))
    }

    pub fn run_with_config(&self, config: &AliasConfig) -> RunOutput {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = plan_and_execute(config, &mut stdout, &mut stderr);

        RunOutput {
            result,
            stdout: String::from_utf8(stdout).expect("stdout is not UTF-8"),
            stderr: String::from_utf8(stderr).expect("stderr is not UTF-8"),
        }
    }

    /// Sorted listing of the emoji directory as `name` or `name -> target`.
    pub fn listing(&self) -> Vec<String> {
        list_directory(&self.filedir())
    }
}

impl Default for EmojiFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn list_directory(dir: &Path) -> Vec<String> {
    let mut entries: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            let entry = entry.expect("Failed to read directory entry");
            let name = entry.file_name().to_string_lossy().into_owned();
            match fs::read_link(entry.path()) {
                Ok(target) => format!("{} -> {}", name, target.display()),
                Err(_) => name,
            }
        })
        .collect();
    entries.sort();
    entries
}
