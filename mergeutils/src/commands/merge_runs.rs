use crate::logic::merge_plan::{plan_merge, write_merge_plan};
use crate::logic::sample_table::{SampleTable, DEFAULT_SAMPLE_TYPE};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    about = "Print shell commands merging sequencing runs into complete samples",
    long_about = "Print shell commands merging sequencing runs into complete samples. Each FASTQ file is looked up by its barcode in the sample table and one `cat <file> >> <outdir>/<subject>_v<visit>_<read>.fastq.gz` line is printed per file, in the order given. Pipe the output into a shell to perform the merge.",
    version,
    author
)]
pub struct MergeRuns {
    #[arg(help = "FASTQ files to process", required = true)]
    fastq: Vec<PathBuf>,
    #[arg(
        short,
        long,
        help = "Sample table connecting barcode to subject and visit (csv/tsv)",
        long_help = "Sample table connecting barcode to subject and visit (csv/tsv). The first column should be barcodes; \"Sample type\", \"Subject id\" and \"Visit\" columns are required."
    )]
    sample_table: PathBuf,
    #[arg(
        short,
        long,
        help = "Output directory to write merged files to",
        default_value = "merged_runs"
    )]
    outdir: PathBuf,
    #[arg(long, help = "Sample type to merge", default_value = DEFAULT_SAMPLE_TYPE)]
    sample_type: String,
}

impl MergeRuns {
    pub fn run(&self) -> anyhow::Result<()> {
        let samples = SampleTable::load(&self.sample_table, &self.sample_type).with_context(|| {
            format!(
                "Failed to load sample table {}",
                self.sample_table.display()
            )
        })?;
        let plan = plan_merge(&self.fastq, &samples, &self.outdir);
        let missing = write_merge_plan(&plan, std::io::stdout().lock())?;
        if !missing.is_empty() {
            return Err(anyhow::anyhow!(
                "Samples not found for barcodes: {}",
                missing
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let command = MergeRuns::parse_from([
            "merge-runs",
            "-s",
            "samples.tsv",
            "X_13_1_20170101_FC1_X_idx1_R1",
        ]);
        assert_eq!(command.outdir, PathBuf::from("merged_runs"));
        assert_eq!(command.sample_type, "Faeces");
        assert!(MergeRuns::try_parse_from(["merge-runs", "-s", "samples.tsv"]).is_err());
    }

    #[test]
    fn test_missing_sample_fails() {
        let command = MergeRuns::parse_from([
            "merge-runs",
            "-s",
            "./testfiles/samples.tsv",
            "X_13_1_20170101_FC1_X_idx1_R1",
            "X_12_1_20170101_FC1_X_idx1_R1",
        ]);
        assert!(command.run().is_err());

        let command = MergeRuns::parse_from([
            "merge-runs",
            "-s",
            "./testfiles/samples.tsv",
            "X_13_1_20170101_FC1_X_idx1_R1",
            "X_14_1_20170101_FC1_X_idx1_R1",
        ]);
        assert!(command.run().is_ok());
    }
}
