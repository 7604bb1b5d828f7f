//! Bike CLI - terminal rendition of the bike sharing usage dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bike-cli",
    version,
    about = "Bike sharing daily usage dashboard, in the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: bike_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bike_cmd::run(cli.command)
}
