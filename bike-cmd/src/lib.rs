//! Command implementations for the bike dashboard CLI.
//!
//! Each command loads the dataset from the fixed `all_data.csv` location
//! relative to the working directory, then renders the same view model the
//! web dashboard draws.

use clap::Subcommand;

pub mod seasons;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print usage metrics and chart data for a date range and season
    Summary {
        /// First day to include (YYYY-MM-DD); defaults to the earliest date in the dataset
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Last day to include (YYYY-MM-DD); defaults to the latest date in the dataset
        #[arg(short = 'e', long)]
        end: Option<String>,

        /// Season label to keep ("Spring", "Summer", "Fall", "Winter"); defaults to "All"
        #[arg(long)]
        season: Option<String>,

        /// Print the full view model as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// List the season dropdown options present in the dataset
    Seasons,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let data_path = bike_core::loader::DEFAULT_DATA_PATH;
    match command {
        Command::Summary {
            start,
            end,
            season,
            json,
        } => {
            let args = summary::SummaryArgs {
                start,
                end,
                season,
                json,
            };
            summary::run_summary(data_path, &args)
        }
        Command::Seasons => seasons::run_seasons(data_path),
    }
}
