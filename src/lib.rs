#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{DEFAULT_ALIASES_FILE_NAME, DEFAULT_FILE_EXTENSION, DEFAULT_PREFIX};
pub mod models;
pub use models::{
    load_aliases, scan_directory, AliasConfig, AliasExecutor, AliasLoad, AliasLoader, AliasPlan,
    AliasReport, AliasTable, CodepointSequence, Diagnostic, DirectoryScan, Error,
    ExecutionSummary, FileExtension, FileNaming, PlannedAlias,
};
pub mod types;
pub use types::{Codepoint, FileName, LineNumber};

use log::warn;
use std::io::Write;

/// Creates the aliases described by `config`.
///
/// Summary and preview lines are written to `out`; each diagnostic is written
/// to `err` as soon as its stage finishes, so they are not lost if the run
/// aborts later. A directory that cannot be scanned is reported and turns the
/// run into an empty one.
///
/// Returns an error only for conditions that abort the run: an unreadable
/// mapping file, a file that cannot be removed, or a link that cannot be created.
pub fn plan_and_execute<W: Write, E: Write>(
    config: &AliasConfig,
    out: &mut W,
    err: &mut E,
) -> Result<AliasReport, Error> {
    let mut report = AliasReport::default();

    let plan = match scan_directory(&config.filedir, &config.naming) {
        Ok(scan) => {
            let load = load_aliases(&config.aliases_path)?;
            report_diagnostics(&mut report, load.diagnostics, err)?;
            report_diagnostics(&mut report, scan.diagnostics.clone(), err)?;

            AliasPlan::build(&load.aliases, &scan, &config.naming, config.replace)
        }
        Err(e @ Error::NotADirectory(_)) => {
            warn!("{}", e);
            report_diagnostics(
                &mut report,
                vec![Diagnostic::ScanFailed {
                    message: e.to_string(),
                }],
                err,
            )?;

            AliasPlan::default()
        }
        Err(e) => return Err(e),
    };

    report_diagnostics(&mut report, plan.diagnostics.clone(), err)?;

    let executor = AliasExecutor::new(&config.filedir, config.replace, config.dry_run);
    report.summary = executor.execute(&plan, out)?;

    Ok(report)
}

fn report_diagnostics<E: Write>(
    report: &mut AliasReport,
    diagnostics: Vec<Diagnostic>,
    err: &mut E,
) -> Result<(), Error> {
    for diagnostic in diagnostics {
        writeln!(err, "{}", diagnostic)?;
        report.diagnostics.push(diagnostic);
    }
    Ok(())
}
