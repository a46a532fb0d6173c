use super::filename::{FilenameConvention, FilenameRecord, SkipReason};
use super::remap_table::RemapTable;
use crate::error::RenameUtilsError;
use log::{debug, warn};
use std::fmt::{self, Display};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Copy,
    Symlink,
    Rename,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Copy => write!(f, "copy"),
            ActionKind::Symlink => write!(f, "symlink"),
            ActionKind::Rename => write!(f, "rename"),
        }
    }
}

/// Which of the original and the corrected path is the source of the
/// filesystem operation. `Reverse` undoes an earlier `Forward` run given the
/// same input list and table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionDirection {
    #[default]
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    DryRun,
    Execute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub convention: FilenameConvention,
    /// Directory receiving corrected files. The source directory is used when
    /// not set.
    pub outdir: Option<PathBuf>,
    pub action: ActionKind,
    pub direction: ActionDirection,
    pub mode: ExecutionMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAction {
    pub kind: ActionKind,
    pub from: PathBuf,
    pub to: PathBuf,
}

impl PlannedAction {
    /// Perform the operation. An existing destination is never overwritten.
    pub fn execute(&self) -> Result<(), RenameUtilsError> {
        let result = if fs::symlink_metadata(&self.to).is_ok() {
            Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            ))
        } else {
            match self.kind {
                ActionKind::Copy => fs::copy(&self.from, &self.to).map(|_| ()),
                ActionKind::Rename => fs::rename(&self.from, &self.to),
                ActionKind::Symlink => {
                    fs::canonicalize(&self.from).and_then(|target| symlink(&target, &self.to))
                }
            }
        };
        result.map_err(|error| RenameUtilsError::ActionError {
            action: self.kind,
            from: self.from.clone(),
            to: self.to.clone(),
            error,
        })
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Result of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Dry run; the action was only reported.
    Planned(PlannedAction),
    Executed(PlannedAction),
    /// The file's key is not in the remap table.
    NoChange(PathBuf),
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
    /// The action failed; no further file was processed.
    Failed {
        action: PlannedAction,
        message: String,
    },
}

impl RenameConfig {
    /// Decide what should happen to a parsed file. `None` means the table has
    /// no entry for it.
    pub fn plan(
        &self,
        record: &FilenameRecord,
        table: &RemapTable,
    ) -> Result<Option<PlannedAction>, SkipReason> {
        let mapped = match table.get(&record.key) {
            Some(x) => x,
            None => return Ok(None),
        };
        let new_basename = self
            .convention
            .rename(&record.basename, mapped)
            .ok_or(SkipReason::TooShort)?;
        let original = record.path();
        let corrected = self
            .outdir
            .as_deref()
            .unwrap_or(&record.directory)
            .join(new_basename);
        let (from, to) = match self.direction {
            ActionDirection::Forward => (original, corrected),
            ActionDirection::Reverse => (corrected, original),
        };
        Ok(Some(PlannedAction {
            kind: self.action,
            from,
            to,
        }))
    }

    /// Process `files` in order, writing one progress line per file to
    /// `output`. Processing stops at the first failed filesystem action;
    /// actions already performed are kept.
    pub fn run_batch<P: AsRef<Path>, W: Write>(
        &self,
        files: &[P],
        table: &RemapTable,
        mut output: W,
    ) -> Result<Vec<FileOutcome>, RenameUtilsError> {
        if self.mode == ExecutionMode::Execute {
            if let Some(outdir) = self.outdir.as_ref() {
                fs::create_dir_all(outdir)?;
            }
        }

        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            let path = path.as_ref();
            let planned = self
                .convention
                .parse(path)
                .and_then(|record| {
                    debug!("{}: key {}", path.display(), record.key);
                    self.plan(&record, table)
                });

            let action = match planned {
                Ok(Some(action)) => action,
                Ok(None) => {
                    writeln!(output, "{}  --> No change", path.display())?;
                    outcomes.push(FileOutcome::NoChange(path.to_path_buf()));
                    continue;
                }
                Err(reason) => {
                    warn!("{}: {}", path.display(), reason);
                    writeln!(
                        output,
                        "WARNING: Could not parse filename {}  -- Ignoring",
                        path.display()
                    )?;
                    outcomes.push(FileOutcome::Skipped {
                        path: path.to_path_buf(),
                        reason,
                    });
                    continue;
                }
            };

            writeln!(
                output,
                "{}  --> {}",
                action.from.display(),
                action.to.display()
            )?;
            match self.mode {
                ExecutionMode::DryRun => outcomes.push(FileOutcome::Planned(action)),
                ExecutionMode::Execute => match action.execute() {
                    Ok(()) => outcomes.push(FileOutcome::Executed(action)),
                    Err(e) => {
                        outcomes.push(FileOutcome::Failed {
                            action,
                            message: e.to_string(),
                        });
                        break;
                    }
                },
            }
        }
        Ok(outcomes)
    }
}
