pub mod commands;
pub mod error;
pub mod logic;

use clap::Args;

#[derive(Debug, Args)]
#[command(version, about = "Sequencing run merge utilities", author)]
pub struct MergeUtils {
    #[command(subcommand)]
    commands: commands::Commands,
}

impl MergeUtils {
    pub fn run(&self) -> anyhow::Result<()> {
        self.commands.run()
    }
}
