//! List the season dropdown options.

use bike_data::filter::season_options;
use std::io::Write;

pub fn run_seasons(data_path: &str) -> anyhow::Result<()> {
    let table = bike_core::loader::load_table(data_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for option in season_options(&table) {
        if option.is_empty() {
            writeln!(out, "(unlabelled)")?;
        } else {
            writeln!(out, "{}", option)?;
        }
    }
    Ok(())
}
