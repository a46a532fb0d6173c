pub mod commands;
pub mod error;
pub mod logic;

use clap::Args;

#[derive(Debug, Args)]
#[command(version, about = "Rename sequencing files according to remap tables", author)]
pub struct RenameUtils {
    #[command(subcommand)]
    commands: commands::Commands,
}

impl RenameUtils {
    pub fn run(&self) -> anyhow::Result<()> {
        self.commands.run()
    }
}
