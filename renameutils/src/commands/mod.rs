mod remap_subject_ids;
mod rename_visit_ids;

use crate::logic::filename::FilenameConvention;
use crate::logic::planner::{
    ActionDirection, ActionKind, ExecutionMode, FileOutcome, RenameConfig,
};
use crate::logic::remap_table::RemapTable;
use anyhow::Context;
use clap::{Args, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "remap-subject-ids", alias = "rs")]
    RemapSubjectIds(remap_subject_ids::RemapSubjectIds),
    #[command(name = "rename-visit-ids", alias = "rv")]
    RenameVisitIds(rename_visit_ids::RenameVisitIds),
}

impl Commands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::RemapSubjectIds(x) => x.run(),
            Commands::RenameVisitIds(x) => x.run(),
        }
    }
}

/// Options shared by the rename commands.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ActionOptions {
    #[arg(
        long,
        help = "Invert the remap table before lookup",
        long_help = "Invert the remap table before lookup, so that files named with corrected IDs are mapped back to the original IDs."
    )]
    reverse_table: bool,
    #[arg(
        long,
        help = "Swap source and destination of file system actions",
        long_help = "Swap source and destination of file system actions. Give the original file list to undo an earlier run."
    )]
    reverse_action: bool,
    #[arg(short, long, help = "Create symlinks instead of copying or renaming")]
    link: bool,
    #[arg(
        long,
        help = "Actually execute file system actions. Default is to only print planned actions"
    )]
    execute: bool,
}

impl ActionOptions {
    fn config(
        &self,
        convention: FilenameConvention,
        outdir: Option<PathBuf>,
        default_action: ActionKind,
    ) -> RenameConfig {
        RenameConfig {
            convention,
            outdir,
            action: if self.link {
                ActionKind::Symlink
            } else {
                default_action
            },
            direction: if self.reverse_action {
                ActionDirection::Reverse
            } else {
                ActionDirection::Forward
            },
            mode: if self.execute {
                ExecutionMode::Execute
            } else {
                ExecutionMode::DryRun
            },
        }
    }

    fn run(
        &self,
        files: &[PathBuf],
        remap: &Path,
        column: &str,
        config: &RenameConfig,
    ) -> anyhow::Result<()> {
        let mut table = RemapTable::load(remap, column)
            .with_context(|| format!("Failed to load remap table {}", remap.display()))?;
        if self.reverse_table {
            table = table.inverted(config.convention);
        }

        let outcomes = config.run_batch(files, &table, std::io::stdout().lock())?;

        let count = |f: fn(&FileOutcome) -> bool| outcomes.iter().filter(|x| f(x)).count();
        info!(
            "{} planned, {} executed, {} unchanged, {} skipped",
            count(|x| matches!(x, FileOutcome::Planned(_))),
            count(|x| matches!(x, FileOutcome::Executed(_))),
            count(|x| matches!(x, FileOutcome::NoChange(_))),
            count(|x| matches!(x, FileOutcome::Skipped { .. })),
        );

        if let Some(FileOutcome::Failed { message, .. }) = outcomes.last() {
            return Err(anyhow::anyhow!(
                "{} (processed {} of {} files)",
                message,
                outcomes.len() - 1,
                files.len()
            ));
        }
        Ok(())
    }
}
