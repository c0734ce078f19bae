use crate::models::AliasPlan;
use crate::Error;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub replaced: usize,
    pub created: usize,
}

/// Applies an [`AliasPlan`] to a directory, or previews it.
pub struct AliasExecutor<'a> {
    filedir: &'a Path,
    replace: bool,
    dry_run: bool,
}

impl<'a> AliasExecutor<'a> {
    pub fn new(filedir: &'a Path, replace: bool, dry_run: bool) -> Self {
        Self {
            filedir,
            replace,
            dry_run,
        }
    }

    /// Removes displaced files, then creates every planned link, writing the
    /// summary (and dry-run preview) lines to `out`.
    ///
    /// All removals happen before the first link is created. The first link
    /// that cannot be created aborts the run with [`Error::SymlinkFailed`].
    pub fn execute<W: Write>(
        &self,
        plan: &AliasPlan,
        out: &mut W,
    ) -> Result<ExecutionSummary, Error> {
        let mut summary = ExecutionSummary::default();

        if self.replace {
            let to_replace = plan.to_replace();
            if !self.dry_run {
                for file_name in &to_replace {
                    debug!("removing {}", file_name);
                    fs::remove_file(self.filedir.join(file_name)).map_err(|source| {
                        Error::RemoveFailed {
                            file_name: file_name.to_string(),
                            source,
                        }
                    })?;
                }
            }
            summary.replaced = to_replace.len();
            writeln!(out, "replacing {} files", summary.replaced)?;
        }

        for (alias_name, planned) in plan.to_create() {
            if self.dry_run {
                let msg = if planned.replaces.is_some() {
                    "replace "
                } else {
                    ""
                };
                writeln!(out, "{}{} -> {}", msg, alias_name, planned.target_name)?;
            } else {
                create_symlink(&planned.target_name, &self.filedir.join(alias_name)).map_err(
                    |source| Error::SymlinkFailed {
                        alias_name: alias_name.clone(),
                        target_name: planned.target_name.clone(),
                        source,
                    },
                )?;
            }
        }

        summary.created = plan.len();
        writeln!(out, "created {} symlinks", summary.created)?;
        info!(
            "{} {} aliases in {}",
            if self.dry_run { "previewed" } else { "created" },
            summary.created,
            self.filedir.display()
        );

        Ok(summary)
    }
}

/// Links `link` to the bare file name `target`, resolved relative to the link's directory.
#[cfg(unix)]
fn create_symlink(target: &str, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &str, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(target: &str, link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!(
            "symlinks are not supported on this platform ({} -> {})",
            link.display(),
            target
        ),
    ))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::models::{AliasTable, CodepointSequence, DirectoryScan, FileExtension, FileNaming};
    use std::fs::File;
    use tempfile::TempDir;

    fn seq(s: &str) -> CodepointSequence {
        s.parse().unwrap()
    }

    fn plan_for(dir: &TempDir, entries: &[(&str, &str)], replace: bool) -> AliasPlan {
        let naming = FileNaming::new("emoji_u", FileExtension::Png);
        let scan = crate::scan_directory(dir.path(), &naming).unwrap();
        let table: AliasTable = entries
            .iter()
            .map(|(alias, target)| (seq(alias), seq(target)))
            .collect();
        AliasPlan::build(&table, &scan, &naming, replace)
    }

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[test]
    fn test_creates_relative_symlink() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "emoji_u1f601.png");
        let plan = plan_for(&dir, &[("1f600", "1f601")], false);

        let mut out = Vec::new();
        let summary = AliasExecutor::new(dir.path(), false, false)
            .execute(&plan, &mut out)
            .unwrap();

        assert_eq!(summary, ExecutionSummary { replaced: 0, created: 1 });
        assert_eq!(String::from_utf8(out).unwrap(), "created 1 symlinks\n");
        assert_eq!(
            fs::read_link(dir.path().join("emoji_u1f600.png")).unwrap(),
            Path::new("emoji_u1f601.png")
        );
    }

    #[test]
    fn test_dry_run_previews_without_touching_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "emoji_u1f600.png");
        touch(&dir, "emoji_u1f601.png");
        let plan = plan_for(&dir, &[("1f600", "1f601"), ("1f602", "1f601")], true);

        let mut out = Vec::new();
        AliasExecutor::new(dir.path(), true, true)
            .execute(&plan, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "replacing 1 files\n\
             replace emoji_u1f600.png -> emoji_u1f601.png\n\
             emoji_u1f602.png -> emoji_u1f601.png\n\
             created 2 symlinks\n"
        );
        assert!(!fs::symlink_metadata(dir.path().join("emoji_u1f600.png"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert!(!dir.path().join("emoji_u1f602.png").exists());
    }

    #[test]
    fn test_replace_removes_before_creating() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "emoji_u1f600.png");
        touch(&dir, "emoji_u1f601.png");
        let plan = plan_for(&dir, &[("1f600", "1f601")], true);

        let mut out = Vec::new();
        let summary = AliasExecutor::new(dir.path(), true, false)
            .execute(&plan, &mut out)
            .unwrap();

        assert_eq!(summary, ExecutionSummary { replaced: 1, created: 1 });
        assert_eq!(
            fs::read_link(dir.path().join("emoji_u1f600.png")).unwrap(),
            Path::new("emoji_u1f601.png")
        );
    }

    #[test]
    fn test_symlink_failure_aborts() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "emoji_u1f601.png");
        let plan = plan_for(&dir, &[("1f600", "1f601"), ("1f602", "1f601")], false);

        // Occupy the first alias name after planning so creation collides.
        touch(&dir, "emoji_u1f600.png");

        let mut out = Vec::new();
        let result = AliasExecutor::new(dir.path(), false, false).execute(&plan, &mut out);

        assert!(matches!(
            result,
            Err(Error::SymlinkFailed { ref alias_name, .. }) if alias_name == "emoji_u1f600.png"
        ));
        assert!(!dir.path().join("emoji_u1f602.png").exists());
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_plan_reports_zero() {
        let dir = TempDir::new().unwrap();
        let plan = AliasPlan::build(
            &AliasTable::new(),
            &DirectoryScan::new(),
            &FileNaming::new("emoji_u", FileExtension::Png),
            false,
        );

        let mut out = Vec::new();
        AliasExecutor::new(dir.path(), false, false)
            .execute(&plan, &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "created 0 symlinks\n");
    }
}
