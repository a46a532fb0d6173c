use clap::{Parser, Subcommand};
use std::env;

#[derive(Debug, Subcommand)]
pub enum Commands {
    RenameUtils(renameutils::RenameUtils),
    MergeUtils(mergeutils::MergeUtils),
}

impl Commands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::RenameUtils(x) => x.run(),
            Commands::MergeUtils(x) => x.run(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "sample toolkit")]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action= clap::ArgAction::Count, help="verbose level")]
    verbose: u8,
    #[command(subcommand)]
    commands: Commands,
}

fn main() -> anyhow::Result<()> {
    let matches = Cli::parse();

    match matches.verbose {
        1 => env::set_var("RUST_LOG", "info"),
        2 => env::set_var("RUST_LOG", "debug"),
        3 => env::set_var("RUST_LOG", "trace"),
        _ => {
            if env::var("RUST_LOG").is_err() {
                env::set_var("RUST_LOG", "warn")
            }
        }
    }

    pretty_env_logger::init();

    matches.commands.run()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli() {
        let cli = Cli::try_parse_from([
            "sampletoolkit",
            "-vv",
            "rename-utils",
            "rename-visit-ids",
            "-r",
            "remap.tsv",
            "4295_v4_1.fastq.gz",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.commands, Commands::RenameUtils(_)));

        let cli = Cli::try_parse_from([
            "sampletoolkit",
            "merge-utils",
            "merge-runs",
            "-s",
            "samples.tsv",
            "X_13_1_20170101_FC1_X_idx1_R1",
        ])
        .unwrap();
        assert!(matches!(cli.commands, Commands::MergeUtils(_)));

        assert!(Cli::try_parse_from(["sampletoolkit", "rename-utils", "remap-subject-ids"]).is_err());
    }
}
