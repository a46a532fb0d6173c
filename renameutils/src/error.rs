use crate::logic::planner::ActionKind;
use sampletoolkit_common::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameUtilsError {
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Table Error: {0}")]
    TableError(#[from] TableError),
    #[error("Failed to {action} {} to {}: {error}", .from.display(), .to.display())]
    ActionError {
        action: ActionKind,
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: std::io::Error,
    },
}
