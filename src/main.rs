mod commands;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "howto-checklist")]
#[command(version, about = "Print the content checklist for how-to guide entries")]
struct Cli {
    /// Print the checklist as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::show::run(cli.json)
}
