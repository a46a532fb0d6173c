use super::ActionOptions;
use crate::logic::filename::FilenameConvention;
use crate::logic::planner::ActionKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    about = "Rename sequencing files whose subject/visit prefix is listed in a remap table",
    long_about = "Rename sequencing files whose subject/visit prefix is listed in a remap table. The first seven characters of the file name (e.g. 4295_v4 in 4295_v4_1.fastq.gz) are replaced with the corrected value.",
    version,
    author
)]
pub struct RenameVisitIds {
    #[arg(help = "Files to process", required = true)]
    files: Vec<PathBuf>,
    #[arg(
        short,
        long,
        help = "Remap table (csv/tsv)",
        long_help = "Remap table (csv/tsv). The first column should be the current prefix such as 4295_v4."
    )]
    remap: PathBuf,
    #[arg(
        short,
        long,
        help = "Output directory (files are renamed in place if not specified)"
    )]
    outdir: Option<PathBuf>,
    #[arg(long, help = "Remap table column with corrected prefixes", default_value = "correct_id")]
    column: String,
    #[command(flatten)]
    options: ActionOptions,
}

impl RenameVisitIds {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.options.config(
            FilenameConvention::FixedPrefix,
            self.outdir.clone(),
            ActionKind::Rename,
        );
        self.options
            .run(&self.files, &self.remap, &self.column, &config)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::logic::planner::{ActionDirection, ExecutionMode, RenameConfig};

    #[test]
    fn test_default_is_dry_run() {
        let command = RenameVisitIds::parse_from([
            "rename-visit-ids",
            "-r",
            "remap.tsv",
            "--reverse-action",
            "4295_v4_1.fastq.gz",
            "4295_v4_2.fastq.gz",
        ]);
        assert_eq!(command.files.len(), 2);
        assert_eq!(command.column, "correct_id");
        assert_eq!(
            command.options.config(
                FilenameConvention::FixedPrefix,
                command.outdir.clone(),
                ActionKind::Rename
            ),
            RenameConfig {
                convention: FilenameConvention::FixedPrefix,
                outdir: None,
                action: ActionKind::Rename,
                direction: ActionDirection::Reverse,
                mode: ExecutionMode::DryRun,
            }
        );
    }
}
