// SPDX-License-Identifier: MIT OR Apache-2.0

//! Index statistics command

use anyhow::Result;

use crate::cli::{IndexArgs, OutputFormat};
use wuzzer::config::Config;
use wuzzer::output::{print_json, write_stats, StatsJson};

pub fn run(
    index_args: &IndexArgs,
    format: OutputFormat,
    compact: bool,
    config: &Config,
) -> Result<()> {
    let index = super::build_index(index_args, config)?;

    match format {
        OutputFormat::Json => print_json(&StatsJson::from_index(&index), compact)?,
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            write_stats(&mut stdout.lock(), &index)?;
        }
    }

    Ok(())
}
