use clap::{Parser, ValueEnum};
use emoji_aliases::{
    plan_and_execute, AliasConfig, FileExtension, FileNaming, DEFAULT_ALIASES_FILE_NAME,
    DEFAULT_FILE_EXTENSION, DEFAULT_PREFIX,
};
use log::{debug, error};
use std::env;
use std::io;
use std::path::PathBuf;

/// Create aliases in target directory.
///
/// The target files should not contain the emoji variation selector
/// code point in their names.
#[derive(Parser, Debug)]
#[command(name = "add-emoji-aliases", version)]
struct Cli {
    /// Directory containing files to alias
    #[arg(short = 'd', long, value_name = "dir")]
    filedir: PathBuf,

    /// File name prefix
    #[arg(short, long, value_name = "pfx", default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// File name extension
    #[arg(short, long, value_enum, default_value = DEFAULT_FILE_EXTENSION.as_str())]
    ext: ExtensionArg,

    /// Replace existing files/aliases
    #[arg(short, long)]
    replace: bool,

    /// Print out aliases to create only
    #[arg(short = 'n', long = "dry_run", visible_alias = "dry-run")]
    dry_run: bool,

    /// Alias mapping file (defaults to emoji_aliases.txt next to the executable)
    #[arg(short, long, value_name = "file")]
    aliases: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ExtensionArg {
    Ai,
    Png,
    Sgv,
}

impl From<ExtensionArg> for FileExtension {
    fn from(ext: ExtensionArg) -> Self {
        match ext {
            ExtensionArg::Ai => FileExtension::Ai,
            ExtensionArg::Png => FileExtension::Png,
            ExtensionArg::Sgv => FileExtension::Sgv,
        }
    }
}

fn default_aliases_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ALIASES_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ALIASES_FILE_NAME))
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let config = AliasConfig {
        filedir: cli.filedir,
        aliases_path: cli.aliases.unwrap_or_else(default_aliases_path),
        naming: FileNaming::new(cli.prefix, cli.ext.into()),
        replace: cli.replace,
        dry_run: cli.dry_run,
    };
    debug!("{:?}", config);

    let stdout = io::stdout();
    let stderr = io::stderr();

    match plan_and_execute(&config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(report) => {
            debug!(
                "done: {} replaced, {} created, {} diagnostics",
                report.summary.replaced,
                report.summary.created,
                report.diagnostics.len()
            );
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
