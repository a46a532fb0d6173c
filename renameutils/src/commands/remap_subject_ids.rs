use super::ActionOptions;
use crate::logic::filename::FilenameConvention;
use crate::logic::planner::ActionKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    about = "Copy or link sequencing files under corrected subject IDs",
    long_about = "Copy or link sequencing files under corrected subject IDs. File names are expected to look like 1.3250.V3_S34_L001_R1_001.fastq.gz; first visit files carry no visit segment (1.3264_S67_L001_R1_001.fastq.gz).",
    version,
    author
)]
pub struct RemapSubjectIds {
    #[arg(help = "Files to process", required = true)]
    files: Vec<PathBuf>,
    #[arg(
        short,
        long,
        help = "Remap table (csv/tsv)",
        long_help = "Remap table (csv/tsv). The first column should be subject_visit keys such as 3250_v3."
    )]
    remap: PathBuf,
    #[arg(
        short,
        long,
        help = "Output directory for all renamed files (required to avoid collisions)"
    )]
    outdir: PathBuf,
    #[arg(long, help = "Remap table column with corrected subject IDs", default_value = "ind.ratt")]
    column: String,
    #[command(flatten)]
    options: ActionOptions,
}

impl RemapSubjectIds {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.options.config(
            FilenameConvention::DottedPrefix,
            Some(self.outdir.clone()),
            ActionKind::Copy,
        );
        self.options
            .run(&self.files, &self.remap, &self.column, &config)
    }
}
