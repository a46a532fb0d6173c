mod merge_runs;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "merge-runs", alias = "mr")]
    MergeRuns(merge_runs::MergeRuns),
}

impl Commands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::MergeRuns(x) => x.run(),
        }
    }
}
