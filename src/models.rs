pub mod alias_executor;
pub use alias_executor::{AliasExecutor, ExecutionSummary};

pub mod alias_loader;
pub use alias_loader::{load_aliases, AliasLoad, AliasLoader};

pub mod alias_plan;
pub use alias_plan::{AliasPlan, PlannedAlias};

pub mod alias_report;
pub use alias_report::AliasReport;

pub mod alias_table;
pub use alias_table::AliasTable;

pub mod codepoint_sequence;
pub use codepoint_sequence::CodepointSequence;

pub mod config;
pub use config::{AliasConfig, FileExtension, FileNaming};

pub mod diagnostic;
pub use diagnostic::Diagnostic;

pub mod directory_scanner;
pub use directory_scanner::{scan_directory, DirectoryScan};

pub mod error;
pub use error::Error;
