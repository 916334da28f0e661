use anagram_config::AppConfig;
use anagram_core::{QueryService, Summary};
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use super::{require_dictionary, seeded_store};
use crate::cli::OutputFormat;

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let (store, outcome) = seeded_store(config);
    require_dictionary(&outcome)?;
    let summary = QueryService::new(store).summary();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize statistics as JSON")?;
            println!("{json}");
        }
        OutputFormat::Table => {
            println!("{}\n", "Dictionary Statistics".bold());
            println!("{}", format_table(&summary));
        }
    }
    Ok(())
}

pub fn format_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Statistic", "Value"]);

    for (name, value) in [
        ("Words", summary.count),
        ("Groups", summary.groups),
        ("Groups with anagrams", summary.anagram_groups),
        ("Largest group", summary.largest_group_size),
        ("Max length", summary.max),
        ("Min length", summary.min),
        ("Average length", summary.avg),
        ("Median length", summary.median),
    ] {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table
}
